use super::*;

#[test]
fn new_buffer_is_transparent() {
    let buf = PixelBuffer::new(3, 2).unwrap();
    assert_eq!(buf.data().len(), 3 * 2 * 4);
    assert!(buf.data().iter().all(|&b| b == 0));
    assert_eq!(buf.pixel(2, 1), Some([0, 0, 0, 0]));
    assert_eq!(buf.pixel(3, 0), None);
    assert_eq!(buf.pixel(0, 2), None);
}

#[test]
fn from_raw_rejects_wrong_length() {
    assert!(PixelBuffer::from_raw(2, 2, vec![0; 15]).is_err());
    let buf = PixelBuffer::from_raw(1, 1, vec![1, 2, 3, 4]).unwrap();
    assert_eq!(buf.pixel(0, 0), Some([1, 2, 3, 4]));
}

#[test]
fn copy_from_slice_is_verbatim() {
    let mut buf = PixelBuffer::new(2, 1).unwrap();
    buf.copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(buf.data(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert!(buf.copy_from_slice(&[0; 4]).is_err());
}

#[test]
fn try_clone_does_not_alias() {
    let mut a = PixelBuffer::from_raw(1, 1, vec![9, 9, 9, 9]).unwrap();
    let b = a.try_clone().unwrap();
    a.data_mut().fill(0);
    assert_eq!(b.data(), &[9, 9, 9, 9]);
    assert_eq!(b.canvas(), a.canvas());
}

#[test]
fn absurd_allocation_reports_error() {
    let err = PixelBuffer::new(u32::MAX, u32::MAX).unwrap_err();
    assert!(matches!(err, ScrubError::Allocation { .. }));
}
