/// Skip a test if AWS credentials are not configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("AWS_ACCESS_KEY_ID").is_err() {
            eprintln!("SKIPPED: AWS_ACCESS_KEY_ID not set");
            return;
        }
        if std::env::var("KEYHOLE_TEST_SECRET_ID").is_err() {
            eprintln!("SKIPPED: KEYHOLE_TEST_SECRET_ID not set (set to a Secrets Manager secret id)");
            return;
        }
    };
}
