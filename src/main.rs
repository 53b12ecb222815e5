use clap::Parser;
use img_resize::cli::Args;
use img_resize::processing::resize_file;
use img_resize::{error, logger};
use std::process;

fn main() {
    let args = Args::parse();
    logger::configure(args.quiet, args.verbose);

    let options = match args.into_options() {
        Ok(options) => options,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    match resize_file(&options) {
        Ok(path) => {
            println!("💾 Re-sized image saved to {}", path.display());
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
