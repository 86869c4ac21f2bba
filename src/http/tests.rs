use crate::cli::tests::fake_args;
use crate::cli::Args;
use crate::http::router;
use crate::{app_context, auth};
use axum_test::TestServer;

pub fn test_server() -> TestServer {
    test_server_with(fake_args())
}

pub fn test_server_with(args: Args) -> TestServer {
    auth::init(&args).expect("Failed to initialize passcode signing.");
    let app_context = app_context::init(&args).expect("Failed to initialize app context.");
    let router = router::new(&args, app_context);
    TestServer::new(router).expect("Failed to run test server.")
}
