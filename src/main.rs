fn main() -> std::process::ExitCode {
    docgen_lib::run()
}
