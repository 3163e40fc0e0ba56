use std::process::ExitCode;

fn run(lhs: &str, rhs: &str) -> bigmul::Result<String> {
    let lhs = bigmul::parse(lhs)?;
    let rhs = bigmul::parse(rhs)?;
    let product = bigmul::multiply(&lhs, &rhs)?;
    bigmul::render(&product)
}

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let mut args = std::env::args_os();
    let program = args
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bigmul".into());
    let operands: Vec<_> = args.collect();

    let [lhs, rhs] = operands.as_slice() else {
        eprintln!("Usage: {program} A B");
        return ExitCode::from(2);
    };

    // non utf-8 input becomes U+FFFD and is rejected as an invalid digit
    match run(&lhs.to_string_lossy(), &rhs.to_string_lossy()) {
        Ok(product) => {
            println!("{product}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{program}: {err}");
            ExitCode::FAILURE
        }
    }
}
