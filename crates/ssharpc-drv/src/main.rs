use std::io::{self, Read, Write};

fn main() {
    let mut input = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut input) {
        eprintln!("error: failed to read stdin: {e}");
        std::process::exit(1);
    }

    match ssharpc_drv::compile(&input) {
        Ok(output) => {
            let mut stdout = io::stdout();
            if stdout.write_all(output.as_bytes()).is_err() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
