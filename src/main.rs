use spinview::{Options, Viewer};

fn main() {
    env_logger::init();

    // Optional argument: path to an options TOML file
    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(std::path::Path::new(&path)) {
            Ok(options) => Some(options),
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut viewer = Viewer::builder().with_title("spinview");
    if let Some(options) = options {
        viewer = viewer.with_options(options);
    }

    if let Err(e) = viewer.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
