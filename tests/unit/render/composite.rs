use super::*;

fn solid(w: u32, h: u32, px: Rgba8) -> PixelBuffer {
    PixelBuffer::from_raw(w, h, px.repeat((w * h) as usize)).unwrap()
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_keeps_src_color() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_alpha_on_opaque_blends() {
    let dst = [0, 0, 0, 255];
    let src = [255, 255, 255, 128];
    let out = over(dst, src);
    assert_eq!(out[3], 255);
    assert!((126..=130).contains(&out[0]), "got {out:?}");
    assert_eq!(out[0], out[1]);
    assert_eq!(out[1], out[2]);
}

#[test]
fn blit_places_patch_at_offset() {
    let mut dst = PixelBuffer::new(4, 3).unwrap();
    let src = solid(2, 1, [9, 8, 7, 255]);
    blit_over(&mut dst, &src, 1, 2);

    for y in 0..3 {
        for x in 0..4 {
            let expected = if y == 2 && (1..3).contains(&x) {
                [9, 8, 7, 255]
            } else {
                [0, 0, 0, 0]
            };
            assert_eq!(dst.pixel(x, y), Some(expected), "pixel ({x},{y})");
        }
    }
}

#[test]
fn blit_transparent_patch_leaves_surface_intact() {
    let mut dst = solid(2, 2, [1, 2, 3, 255]);
    let src = solid(2, 2, [200, 200, 200, 0]);
    blit_over(&mut dst, &src, 0, 0);
    assert_eq!(dst, solid(2, 2, [1, 2, 3, 255]));
}

#[test]
fn blit_clips_to_destination() {
    let mut dst = PixelBuffer::new(2, 2).unwrap();
    let src = solid(3, 3, [5, 5, 5, 255]);
    blit_over(&mut dst, &src, 1, 1);
    assert_eq!(dst.pixel(1, 1), Some([5, 5, 5, 255]));
    assert_eq!(dst.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(dst.pixel(1, 0), Some([0, 0, 0, 0]));

    let before = dst.clone();
    blit_over(&mut dst, &src, 2, 0);
    assert_eq!(dst, before);
}

#[test]
fn clear_rect_zeroes_only_region() {
    let mut buf = solid(3, 3, [4, 4, 4, 255]);
    clear_rect(&mut buf, 1, 1, 5, 1);
    assert_eq!(buf.pixel(0, 1), Some([4, 4, 4, 255]));
    assert_eq!(buf.pixel(1, 1), Some([0, 0, 0, 0]));
    assert_eq!(buf.pixel(2, 1), Some([0, 0, 0, 0]));
    assert_eq!(buf.pixel(1, 0), Some([4, 4, 4, 255]));
    assert_eq!(buf.pixel(1, 2), Some([4, 4, 4, 255]));
}
