//! Bucket listing test utilities

use mockito::{Matcher, Mock, ServerGuard};

/// Renders an S3 `ListBucketResult` document containing `keys`
pub fn bucket_listing(prefix: &str, keys: &[&str]) -> String {
    let contents: String = keys
        .iter()
        .map(|key| {
            format!(
                "  <Contents>\n    <Key>{key}</Key>\n    <LastModified>2025-08-01T00:00:00.000Z</LastModified>\n    <Size>1073741824</Size>\n    <StorageClass>STANDARD</StorageClass>\n  </Contents>\n"
            )
        })
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <ListBucketResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\n\
         \x20 <Name>therock-nightly-tarball</Name>\n\
         \x20 <Prefix>{prefix}</Prefix>\n\
         \x20 <IsTruncated>false</IsTruncated>\n\
         {contents}</ListBucketResult>\n"
    )
}

/// Registers a listing endpoint answering for `prefix`
pub async fn mock_listing(server: &mut ServerGuard, prefix: &str, keys: &[&str]) -> Mock {
    server
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded("prefix".into(), prefix.into()))
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(bucket_listing(prefix, keys))
        .create_async()
        .await
}
