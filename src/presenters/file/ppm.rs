use crate::adapters::pixel_format::colours_to_rgb8;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `buffer` as a binary PPM (`P6`) image.
pub fn write_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
    let viewport = buffer.viewport();

    // P6: binary RGB, then width, height and max channel value
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", viewport.width(), viewport.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&colours_to_rgb8(buffer.buffer()))?;
    writer.flush()
}

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(filepath)?;
        write_ppm(buffer, BufWriter::new(file))
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
