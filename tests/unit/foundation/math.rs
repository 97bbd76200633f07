use super::*;

#[test]
fn mul_div255_endpoints() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
}

#[test]
fn unpremultiply_restores_opaque_and_clears_transparent() {
    let mut px = vec![10, 20, 30, 255, 9, 9, 9, 0, 64, 32, 0, 128];
    unpremultiply_in_place(&mut px);
    assert_eq!(&px[0..4], &[10, 20, 30, 255]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[128, 64, 0, 128]);
}
