use axis2d::Rect;

/// Unit cells covering `[0, nx] × [0, ny]`, X-major order.
pub fn unit_grid(nx: usize, ny: usize) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(nx * ny);
    for i in 0..nx {
        for j in 0..ny {
            rects.push(Rect::new(i as f64, i as f64 + 1.0, j as f64, j as f64 + 1.0));
        }
    }
    rects
}

/// Irregular tiling of `[0, 6] × [0, 4]` with bins of mixed sizes and
/// T-junctions, plus one isolated bin away from the rest.
pub fn mosaic() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 2.0, 0.0, 4.0),
        Rect::new(2.0, 3.0, 0.0, 1.0),
        Rect::new(3.0, 6.0, 0.0, 1.0),
        Rect::new(2.0, 4.5, 1.0, 2.5),
        Rect::new(4.5, 6.0, 1.0, 3.0),
        Rect::new(2.0, 4.5, 2.5, 4.0),
        Rect::new(4.5, 6.0, 3.0, 4.0),
        Rect::new(8.0, 9.0, 0.5, 1.5),
    ]
}

/// Deterministic permutation of `items` (multiplicative stride over the
/// indices, coprime with the length).
pub fn permuted<T: Clone>(items: &[T], stride: usize) -> Vec<T> {
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }
    let mut step = stride.max(1) % n;
    while step == 0 || gcd(step, n) != 1 {
        step += 1;
    }
    (0..n).map(|i| items[(i * step + 1) % n].clone()).collect()
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Interior sample points of `rect`: centre plus points near each corner.
pub fn interior_samples(rect: &Rect) -> Vec<(f64, f64)> {
    let dx = rect.width() * 1e-3;
    let dy = rect.height() * 1e-3;
    let c = rect.center();
    vec![
        (c.x, c.y),
        (rect.x_min + dx, rect.y_min + dy),
        (rect.x_max - dx, rect.y_min + dy),
        (rect.x_min + dx, rect.y_max - dy),
        (rect.x_max - dx, rect.y_max - dy),
    ]
}
