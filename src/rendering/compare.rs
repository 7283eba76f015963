//! Side-by-side comparison of one image dithered in every colour space.

use diffuse_dither::{ColourSpace, DitherConfig, DitherMode, Ditherer, Palette, Raster};

use crate::error::AppError;

/// One labelled 8-bit RGB image.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub label: &'static str,
    pub width: usize,
    pub height: usize,
    pub rgb: Vec<u8>,
}

/// The original followed by one panel per colour space, in
/// [`ColourSpace::ALL`] order.
pub fn compare_panels(
    image: &Raster<u8>,
    mode: DitherMode,
    palette: &Palette,
) -> Result<Vec<Panel>, AppError> {
    let mut panels = Vec::with_capacity(ColourSpace::ALL.len() + 1);
    for space in ColourSpace::ALL {
        let config = DitherConfig::default()
            .with_mode(mode)
            .with_colour_space(space);
        let result = Ditherer::new(config).dither(image, palette)?;
        tracing::info!(colour_space = %space, %mode, "Dithered panel");
        panels.push(Panel {
            label: space.name(),
            width: result.width(),
            height: result.height(),
            rgb: result.into_rgb(),
        });
    }

    // The dither calls above validated the shape.
    panels.insert(
        0,
        Panel {
            label: "original",
            width: image.width(),
            height: image.height(),
            rgb: image.data().to_vec(),
        },
    );
    Ok(panels)
}

/// Concatenate panels left to right. All panels must share one height.
pub fn side_by_side(panels: &[Panel]) -> Result<Panel, AppError> {
    let height = panels.first().map_or(0, |p| p.height);
    let width: usize = panels.iter().map(|p| p.width).sum();
    if height == 0 || width == 0 || panels.iter().any(|p| p.height != height) {
        return Err(AppError::UnsupportedDimensions { width, height });
    }

    let mut rgb = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for panel in panels {
            let stride = panel.width * 3;
            rgb.extend_from_slice(&panel.rgb[y * stride..(y + 1) * stride]);
        }
    }

    Ok(Panel {
        label: "comparison",
        width,
        height,
        rgb,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn solid(label: &'static str, width: usize, height: usize, value: u8) -> Panel {
        Panel {
            label,
            width,
            height,
            rgb: vec![value; width * height * 3],
        }
    }

    #[test]
    fn test_side_by_side_layout() {
        let panels = [solid("a", 1, 2, 10), solid("b", 2, 2, 20)];
        let strip = side_by_side(&panels).unwrap();
        assert_eq!((strip.width, strip.height), (3, 2));
        let row = [10, 10, 10, 20, 20, 20, 20, 20, 20];
        assert_eq!(strip.rgb, [row, row].concat());
    }

    #[test]
    fn test_side_by_side_height_mismatch() {
        let panels = [solid("a", 1, 2, 0), solid("b", 1, 3, 0)];
        assert!(matches!(
            side_by_side(&panels),
            Err(AppError::UnsupportedDimensions { .. })
        ));
        assert!(side_by_side(&[]).is_err());
    }

    #[test]
    fn test_compare_panels_order_and_content() {
        let pixels: Vec<[u8; 3]> = (0..16u8).map(|i| [i * 16, 128, 255 - i * 16]).collect();
        let image = Raster::from_pixels(4, 4, pixels).unwrap();
        let palette = Palette::from_hex(&["#000", "#fff", "#f00", "#00f"]).unwrap();

        let panels = compare_panels(&image, DitherMode::Atkinson, &palette).unwrap();
        let labels: Vec<_> = panels.iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["original", "srgb", "lin-srgb", "oklab"]);
        assert_eq!(panels[0].rgb, image.data());

        for (panel, space) in panels[1..].iter().zip(ColourSpace::ALL) {
            let allowed = palette.output_bytes(space);
            assert!(panel
                .rgb
                .chunks_exact(3)
                .all(|px| allowed.contains(&[px[0], px[1], px[2]])));
        }
    }
}
