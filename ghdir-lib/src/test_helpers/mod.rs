mod mock_contents_client;

pub use mock_contents_client::MockContentsClient;
