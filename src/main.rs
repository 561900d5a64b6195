use std::process::ExitCode;

fn main() -> ExitCode {
    bloglist::run()
}
