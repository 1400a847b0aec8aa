use std::path::Path;

use image::DynamicImage;

#[ctor::ctor]
fn init() {
    use log4rs;
    log4rs::init_file("log4rs.yaml", Default::default()).unwrap();
}

pub fn log_decoded_image(path: &Path, image: &DynamicImage) {
    log::debug!(
        "decoded '{}': {}x{} pixels, source color type {:?}",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
}
