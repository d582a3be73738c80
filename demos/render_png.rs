// MIT/Apache2 License

use chalkclip::{ClippedView, Error, RasterSurface, ResourceTable, Result};
use std::env;

fn main() -> Result {
    env_logger::init();

    // usage: render_png [OUTPUT] [DENSITY]
    let mut args = env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "clipping.png".to_string());
    let density = match args.next() {
        Some(density) => density
            .parse::<f32>()
            .map_err(|e| Error::Msg(format!("Invalid density \"{}\": {}", density, e)))?,
        None => 1.0,
    };

    let resources = ResourceTable::default().with_density(density);
    let view = ClippedView::new(&resources)?;

    let (width, height) = view.layout().preferred_size();
    let mut surface = RasterSurface::new(width, height)?;
    view.render(&mut surface)?;

    surface.save_png(&output)?;
    log::info!("Wrote {}x{} frame to {}", width, height, output);
    Ok(())
}
