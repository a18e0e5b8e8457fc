mod config_tests;
mod feed_http_tests;
