// Sizing for the image backdrop plane behind the scene.

/// World-space z of the backdrop plane, well behind the particle cube.
pub const BACKDROP_PLANE_Z: f32 = -1000.0;

/// Aspect-fit ("contain") a plane for an image inside a viewport: the wider
/// of the two spans the matching viewport dimension and the other dimension
/// follows the image's aspect ratio. Units are whatever the viewport is in.
pub fn fit_plane_size(image_w: f32, image_h: f32, view_w: f32, view_h: f32) -> (f32, f32) {
    if image_w <= 0.0 || image_h <= 0.0 || view_w <= 0.0 || view_h <= 0.0 {
        return (0.0, 0.0);
    }
    let image_aspect = image_w / image_h;
    let view_aspect = view_w / view_h;
    if image_aspect > view_aspect {
        (view_w, view_w / image_aspect)
    } else {
        (view_h * image_aspect, view_h)
    }
}
