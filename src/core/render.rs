use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::core::file_io::write_image_to_file_or_panic;
use crate::core::sample_grid::{LinearSampleMap, MemberList, SampleRegion};

/**
 * How to rasterize the member scatter. The image is square, matching the
 * square sample region, which fixes the aspect ratio at 1:1. There are no
 * axes; every pixel is either background or marker.
 */
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScatterImageParams {
    pub resolution: u32,
    pub marker_size: u32,
    pub background_color_rgb: [u8; 3],
    pub marker_color_rgb: [u8; 3],
}

impl Default for ScatterImageParams {
    fn default() -> ScatterImageParams {
        // Black squares on white, matching a plain membership scatter.
        ScatterImageParams {
            resolution: 1000,
            marker_size: 1,
            background_color_rgb: [255, 255, 255],
            marker_color_rgb: [0, 0, 0],
        }
    }
}

/// Fill a `marker_size` square centered on (col, row), clipped to the
/// image bounds.
fn draw_marker(
    imgbuf: &mut image::RgbImage,
    col: i32,
    row: i32,
    marker_size: u32,
    color: Rgb<u8>,
) {
    let half = (marker_size / 2) as i32;
    for dx in 0..marker_size as i32 {
        for dy in 0..marker_size as i32 {
            let x = col - half + dx;
            let y = row - half + dy;
            if x >= 0 && y >= 0 && (x as u32) < imgbuf.width() && (y as u32) < imgbuf.height() {
                imgbuf.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/**
 * Rasterize the member list into a PNG scatter plot. Performs no
 * computation on the points themselves; it only places markers.
 *
 * @param params: image resolution, marker size, colors
 * @param region: the same region the members were sampled from; sets the
 *                view bounding box.
 * @param members: the coordinates to draw.
 */
pub fn render_scatter(
    params: &ScatterImageParams,
    region: &SampleRegion,
    members: &MemberList,
    render_path: std::path::PathBuf,
) {
    assert!(params.resolution > 0, "`resolution` must be positive!");
    assert!(params.marker_size > 0, "`marker_size` must be positive!");

    let mut imgbuf = image::RgbImage::from_pixel(
        params.resolution,
        params.resolution,
        Rgb(params.background_color_rgb),
    );

    let to_col = LinearSampleMap::new(params.resolution, region.x_min(), region.x_max());
    // Image rows grow downward; row zero is the top of the view.
    let to_row = LinearSampleMap::new(params.resolution, region.y_max(), region.y_min());

    let marker_color = Rgb(params.marker_color_rgb);
    for i in 0..members.len() {
        let col = to_col.inverse_map(members.x[i]);
        let row = to_row.inverse_map(members.y[i]);
        draw_marker(&mut imgbuf, col, row, params.marker_size, marker_color);
    }

    write_image_to_file_or_panic(render_path, |f| imgbuf.save(f));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_marker_clips_to_bounds() {
        let mut imgbuf = image::RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        draw_marker(&mut imgbuf, 0, 0, 3, Rgb([0, 0, 0]));

        // Top-left corner painted; marker cells off the canvas dropped.
        assert_eq!(*imgbuf.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*imgbuf.get_pixel(1, 1), Rgb([0, 0, 0]));
        assert_eq!(*imgbuf.get_pixel(2, 2), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_scatter_pixel_placement() {
        let region = SampleRegion::new(2.0, nalgebra::Vector2::new(0.0, 0.0)).unwrap();
        let to_col = LinearSampleMap::new(5, region.x_min(), region.x_max());
        let to_row = LinearSampleMap::new(5, region.y_max(), region.y_min());

        // Corners of the view land on the corners of the image.
        assert_eq!(to_col.inverse_map(-1.0), 0);
        assert_eq!(to_col.inverse_map(1.0), 4);
        assert_eq!(to_row.inverse_map(1.0), 0);
        assert_eq!(to_row.inverse_map(-1.0), 4);
    }
}
