use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to interact with DynamoDB: {0}")]
    Aws(String),

    #[error("Failed to decode stored item: {0}")]
    Decode(String),
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_dynamodb::error::SdkError<E, R>> for StoreError
where
    E: std::fmt::Display,
    R: std::fmt::Debug,
{
    fn from(error: aws_sdk_dynamodb::error::SdkError<E, R>) -> Self {
        StoreError::Aws(error.to_string())
    }
}

impl From<serde_dynamo::Error> for StoreError {
    fn from(error: serde_dynamo::Error) -> Self {
        StoreError::Decode(error.to_string())
    }
}
