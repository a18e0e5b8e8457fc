pub mod mock_api;
pub mod test_utils;
