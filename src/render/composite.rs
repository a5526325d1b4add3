use crate::render::buffer::PixelBuffer;

/// Straight (non-premultiplied) RGBA8.
pub type Rgba8 = [u8; 4];

/// Source-over for straight-alpha pixels.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = u32::from(src[3]);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255 - sa;
    let da_inv = mul_div255(u32::from(dst[3]), inv);
    let out_a = sa + da_inv;
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    out[3] = out_a.min(255) as u8;
    for i in 0..3 {
        // Premultiplied sum, scaled by 255, divided back out by the resulting alpha.
        let p = u32::from(src[i]) * sa + u32::from(dst[i]) * da_inv;
        out[i] = ((p + out_a / 2) / out_a).min(255) as u8;
    }
    out
}

/// Composite `src` onto `dst` with its top-left corner at `(x, y)`, clipped to `dst`.
pub fn blit_over(dst: &mut PixelBuffer, src: &PixelBuffer, x: u32, y: u32) {
    let Some((cols, rows)) = clip(dst, x, y, src.width(), src.height()) else {
        return;
    };

    let dst_w = dst.width() as usize;
    let src_w = src.width() as usize;
    let src_data = src.data();
    let dst_data = dst.data_mut();

    for row in 0..rows {
        let s0 = row * src_w * 4;
        let d0 = ((y as usize + row) * dst_w + x as usize) * 4;
        let s_row = &src_data[s0..s0 + cols * 4];
        let d_row = &mut dst_data[d0..d0 + cols * 4];
        for (d, s) in d_row.chunks_exact_mut(4).zip(s_row.chunks_exact(4)) {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
    }
}

/// Zero the `w x h` rectangle at `(x, y)`, clipped to the buffer.
pub fn clear_rect(buf: &mut PixelBuffer, x: u32, y: u32, w: u32, h: u32) {
    let Some((cols, rows)) = clip(buf, x, y, w, h) else {
        return;
    };
    let buf_w = buf.width() as usize;
    let data = buf.data_mut();
    for row in 0..rows {
        let d0 = ((y as usize + row) * buf_w + x as usize) * 4;
        data[d0..d0 + cols * 4].fill(0);
    }
}

/// Visible (columns, rows) of a `w x h` rect placed at `(x, y)`; `None` if nothing is visible.
fn clip(buf: &PixelBuffer, x: u32, y: u32, w: u32, h: u32) -> Option<(usize, usize)> {
    if x >= buf.width() || y >= buf.height() {
        return None;
    }
    let cols = w.min(buf.width() - x) as usize;
    let rows = h.min(buf.height() - y) as usize;
    if cols == 0 || rows == 0 {
        return None;
    }
    Some((cols, rows))
}

fn mul_div255(x: u32, y: u32) -> u32 {
    (x * y + 127) / 255
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
