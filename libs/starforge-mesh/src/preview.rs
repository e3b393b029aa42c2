//! # Preview Rendering
//!
//! Presentational raster of a combined mesh. Nothing here feeds back into
//! the model.
//!
//! The camera is fixed: the frame is the mesh bounds grown by
//! [`PREVIEW_MARGIN`], seen orthographically from elevation
//! [`PREVIEW_ELEVATION_DEG`] and azimuth [`PREVIEW_AZIMUTH_DEG`].
//! [`RasterPreview`] fills triangles back to front (painter's algorithm)
//! with flat two-sided Lambert shading and a uniform face opacity.

use std::io::Cursor;
use std::path::Path;

use config::constants::{
    DEFAULT_VERTEX_COLOR, PREVIEW_AZIMUTH_DEG, PREVIEW_BACKGROUND, PREVIEW_DEFAULT_SIZE,
    PREVIEW_ELEVATION_DEG, PREVIEW_FACE_ALPHA, PREVIEW_MARGIN,
};
use glam::{DVec2, DVec3};
use image::{ImageFormat, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;

// =============================================================================
// CONFIG
// =============================================================================

/// Preview image and camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Margin added around the bounds.
    pub margin: f64,
    /// Camera elevation in degrees.
    pub elevation_deg: f64,
    /// Camera azimuth in degrees.
    pub azimuth_deg: f64,
    /// Opacity multiplier for every face.
    pub face_alpha: f32,
    /// Background color (RGBA).
    pub background: [u8; 4],
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: PREVIEW_DEFAULT_SIZE,
            height: PREVIEW_DEFAULT_SIZE,
            margin: PREVIEW_MARGIN,
            elevation_deg: PREVIEW_ELEVATION_DEG,
            azimuth_deg: PREVIEW_AZIMUTH_DEG,
            face_alpha: PREVIEW_FACE_ALPHA,
            background: PREVIEW_BACKGROUND,
        }
    }
}

// =============================================================================
// FRAME
// =============================================================================

/// Camera framing derived from mesh bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewFrame {
    bounds: Bounds,
    /// Unit vector from the scene toward the camera.
    eye: DVec3,
    right: DVec3,
    up: DVec3,
}

impl PreviewFrame {
    /// Frames `bounds` grown by `margin` from the given camera angles.
    pub fn new(bounds: &Bounds, margin: f64, elevation_deg: f64, azimuth_deg: f64) -> Self {
        let (elev, azim) = (elevation_deg.to_radians(), azimuth_deg.to_radians());
        let eye = DVec3::new(
            elev.cos() * azim.cos(),
            elev.cos() * azim.sin(),
            elev.sin(),
        );
        let right = DVec3::Z.cross(eye).try_normalize().unwrap_or(DVec3::X);
        let up = eye.cross(right);

        Self {
            bounds: bounds.with_margin(margin),
            eye,
            right,
            up,
        }
    }

    /// Frames a mesh with the configured margin and angles.
    pub fn for_mesh(mesh: &Mesh, config: &PreviewConfig) -> MeshResult<Self> {
        let bounds = Bounds::of(mesh)?;
        Ok(Self::new(
            &bounds,
            config.margin,
            config.elevation_deg,
            config.azimuth_deg,
        ))
    }

    /// Framed bounds, margin included.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Unit vector pointing from the scene toward the camera.
    pub fn eye_direction(&self) -> DVec3 {
        self.eye
    }

    /// View-plane coordinates of a point.
    pub fn project(&self, point: DVec3) -> DVec2 {
        DVec2::new(point.dot(self.right), point.dot(self.up))
    }

    /// Distance toward the camera; larger is nearer.
    pub fn depth(&self, point: DVec3) -> f64 {
        point.dot(self.eye)
    }

    /// View-plane rectangle covering all eight corners of the framed box.
    fn view_extent(&self) -> (DVec2, DVec2) {
        let (lo, hi) = (self.bounds.min, self.bounds.max);
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        for i in 0..8 {
            let corner = DVec3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            );
            let p = self.project(corner);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }
}

// =============================================================================
// RENDERER
// =============================================================================

/// Produces a 2-D image of a mesh.
pub trait PreviewRenderer {
    /// Renders `mesh` as seen through `frame`.
    fn render(&self, mesh: &Mesh, frame: &PreviewFrame) -> MeshResult<RgbaImage>;
}

/// Software rasterizer for preview images.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RasterPreview {
    /// Image and camera settings.
    pub config: PreviewConfig,
}

impl RasterPreview {
    /// Creates a rasterizer with the given settings.
    pub fn new(config: PreviewConfig) -> Self {
        Self { config }
    }

    /// Frames and renders `mesh` with this rasterizer's settings.
    pub fn render_mesh(&self, mesh: &Mesh) -> MeshResult<RgbaImage> {
        let frame = PreviewFrame::for_mesh(mesh, &self.config)?;
        self.render(mesh, &frame)
    }
}

struct ScreenTriangle {
    points: [DVec2; 3],
    depth: f64,
    color: [f32; 4],
}

impl PreviewRenderer for RasterPreview {
    fn render(&self, mesh: &Mesh, frame: &PreviewFrame) -> MeshResult<RgbaImage> {
        let PreviewConfig { width, height, .. } = self.config;
        mesh.validate()?;
        if width == 0 || height == 0 {
            return Err(MeshError::invalid_parameter(format!(
                "Preview size must be non-zero: {}x{}",
                width, height
            )));
        }

        let (view_min, view_max) = frame.view_extent();
        let extent = (view_max - view_min).max(DVec2::splat(f64::EPSILON));
        let scale = (f64::from(width) / extent.x).min(f64::from(height) / extent.y);
        let center = (view_min + view_max) / 2.0;
        let half_image = DVec2::new(f64::from(width), f64::from(height)) / 2.0;
        let to_pixel = |p: DVec3| {
            let v = (frame.project(p) - center) * scale;
            // Image rows grow downward.
            DVec2::new(half_image.x + v.x, half_image.y - v.y)
        };

        let colors = mesh.colors();
        let mut triangles: Vec<ScreenTriangle> = (0..mesh.triangle_count())
            .map(|i| {
                let corners = mesh.triangle_corners(i);
                let ids = mesh.triangle(i);
                let base = face_color(colors, ids);
                let facing = mesh.triangle_normal(i).dot(frame.eye_direction()).abs();
                let shade = 0.35 + 0.65 * facing as f32;
                ScreenTriangle {
                    points: corners.map(&to_pixel),
                    depth: corners.iter().map(|&c| frame.depth(c)).sum::<f64>() / 3.0,
                    color: [
                        base[0] * shade,
                        base[1] * shade,
                        base[2] * shade,
                        base[3] * self.config.face_alpha,
                    ],
                }
            })
            .collect();

        // Farthest first.
        triangles.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        let mut image = RgbaImage::from_pixel(width, height, Rgba(self.config.background));
        for triangle in &triangles {
            fill_triangle(&mut image, triangle);
        }

        log::debug!(
            "Rendered preview {}x{} of {} triangles",
            width,
            height,
            triangles.len()
        );
        Ok(image)
    }
}

/// Average vertex color of a face as normalized RGBA.
fn face_color(colors: Option<&[[u8; 4]]>, ids: [u32; 3]) -> [f32; 4] {
    let mut sum = [0.0f32; 4];
    for id in ids {
        let c = colors
            .and_then(|c| c.get(id as usize).copied())
            .unwrap_or(DEFAULT_VERTEX_COLOR);
        for (s, v) in sum.iter_mut().zip(c) {
            *s += f32::from(v) / 255.0 / 3.0;
        }
    }
    sum
}

fn edge(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    (b - a).perp_dot(p - a)
}

/// Alpha-blends one flat triangle, sampling at pixel centers.
fn fill_triangle(image: &mut RgbaImage, triangle: &ScreenTriangle) {
    let [a, b, c] = triangle.points;
    let area = edge(a, b, c);
    if area.abs() < f64::EPSILON {
        return;
    }
    let sign = area.signum();

    let (w, h) = (f64::from(image.width()), f64::from(image.height()));
    let lo = a.min(b).min(c).max(DVec2::ZERO).floor();
    let hi = a.max(b).max(c).min(DVec2::new(w - 1.0, h - 1.0)).ceil();
    if lo.x > hi.x || lo.y > hi.y {
        return;
    }

    let [r, g, bl, alpha] = triangle.color;
    let alpha = alpha.clamp(0.0, 1.0);
    let src = [r, g, bl].map(|v| v.clamp(0.0, 1.0) * 255.0);

    for y in lo.y as u32..=hi.y as u32 {
        for x in lo.x as u32..=hi.x as u32 {
            let p = DVec2::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let inside = edge(a, b, p) * sign >= 0.0
                && edge(b, c, p) * sign >= 0.0
                && edge(c, a, p) * sign >= 0.0;
            if !inside {
                continue;
            }

            let pixel = image.get_pixel_mut(x, y);
            for ch in 0..3 {
                let dst = f32::from(pixel.0[ch]);
                pixel.0[ch] = (src[ch] * alpha + dst * (1.0 - alpha)).round() as u8;
            }
            let dst_alpha = f32::from(pixel.0[3]) / 255.0;
            pixel.0[3] = ((alpha + dst_alpha * (1.0 - alpha)) * 255.0).round() as u8;
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> MeshResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Renders `mesh` and writes a PNG to `path`.
pub fn save_preview(mesh: &Mesh, config: &PreviewConfig, path: &Path) -> MeshResult<()> {
    let image = RasterPreview::new(*config).render_mesh(mesh)?;
    image.save_with_format(path, ImageFormat::Png)?;
    log::info!(
        "Wrote preview {}x{} to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::cuboid;
    use approx::assert_relative_eq;

    fn small_config() -> PreviewConfig {
        PreviewConfig {
            width: 64,
            height: 48,
            ..PreviewConfig::default()
        }
    }

    #[test]
    fn test_frame_adds_margin() {
        let mesh = cuboid(DVec3::splat(2.0)).unwrap();
        let frame = PreviewFrame::for_mesh(&mesh, &PreviewConfig::default()).unwrap();
        assert_eq!(frame.bounds().min, DVec3::splat(-4.0));
        assert_eq!(frame.bounds().max, DVec3::splat(4.0));
    }

    #[test]
    fn test_camera_direction() {
        let bounds = Bounds {
            min: DVec3::ZERO,
            max: DVec3::ONE,
        };
        let frame = PreviewFrame::new(&bounds, 0.0, 35.0, 40.0);
        let eye = frame.eye_direction();
        assert_relative_eq!(eye.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eye.z, 35f64.to_radians().sin(), epsilon = 1e-12);
        assert!(eye.x > 0.0 && eye.y > 0.0);
        // The world Z axis projects straight up on screen.
        assert_relative_eq!(frame.project(DVec3::Z).x, 0.0, epsilon = 1e-12);
        assert!(frame.project(DVec3::Z).y > 0.0);
    }

    #[test]
    fn test_render_draws_over_background() {
        let mesh = cuboid(DVec3::splat(2.0)).unwrap();
        let image = RasterPreview::new(small_config()).render_mesh(&mesh).unwrap();

        assert_eq!(image.dimensions(), (64, 48));
        assert_eq!(image.get_pixel(0, 0).0, PREVIEW_BACKGROUND);
        assert_ne!(image.get_pixel(32, 24).0, PREVIEW_BACKGROUND);
    }

    #[test]
    fn test_render_uses_vertex_colors() {
        let mut mesh = cuboid(DVec3::splat(2.0)).unwrap();
        mesh.set_uniform_color([255, 0, 0, 255]);
        let image = RasterPreview::new(small_config()).render_mesh(&mesh).unwrap();

        let center = image.get_pixel(32, 24).0;
        assert!(center[0] > center[1]);
        assert!(center[0] > center[2]);
    }

    #[test]
    fn test_render_rejects_empty_mesh_and_zero_size() {
        assert!(matches!(
            RasterPreview::default().render_mesh(&Mesh::new()),
            Err(MeshError::EmptyMesh { .. })
        ));

        let mesh = cuboid(DVec3::ONE).unwrap();
        let config = PreviewConfig {
            width: 0,
            ..small_config()
        };
        assert!(matches!(
            RasterPreview::new(config).render_mesh(&mesh),
            Err(MeshError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_render_rejects_dangling_indices() {
        let mut mesh = cuboid(DVec3::ONE).unwrap();
        mesh.add_triangle(0, 1, 99);
        let frame = PreviewFrame::for_mesh(&mesh, &small_config()).unwrap();

        assert!(matches!(
            RasterPreview::new(small_config()).render(&mesh, &frame),
            Err(MeshError::IndexIntegrity { index: 99, .. })
        ));
    }

    #[test]
    fn test_encode_png_signature() {
        let mesh = cuboid(DVec3::ONE).unwrap();
        let image = RasterPreview::new(small_config()).render_mesh(&mesh).unwrap();
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
