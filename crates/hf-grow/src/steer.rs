//! Left/right ordering of forward candidates.
//!
//! Layout positions are in screen convention (y down); the cross product is
//! taken in a y-up frame so that "left" means left as seen on screen.

use hf_core::VertexKey;
use hf_layout::Layout;

/// z-component of the 2-D cross product `a × b`.
#[inline]
pub fn cross_z((ax, ay): (f32, f32), (bx, by): (f32, f32)) -> f32 {
    ax * by - ay * bx
}

/// Order two forward candidates of `curr` (reached from `prev`) as
/// `(left, right)`.
///
/// The candidate whose outgoing vector has the larger cross product against
/// the incoming vector is left.  Equal values keep `(a, b)` as given.
pub fn order_left_right(
    layout: &Layout,
    prev:   VertexKey,
    curr:   VertexKey,
    a:      VertexKey,
    b:      VertexKey,
) -> (VertexKey, VertexKey) {
    let curr_px = layout.position(curr);
    let incoming = layout.position(prev).delta_y_up(curr_px);
    let cross_a = cross_z(incoming, curr_px.delta_y_up(layout.position(a)));
    let cross_b = cross_z(incoming, curr_px.delta_y_up(layout.position(b)));
    if cross_a >= cross_b { (a, b) } else { (b, a) }
}
