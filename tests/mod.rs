mod retry_tests;
mod session_tests;
mod validation_tests;
