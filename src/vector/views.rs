//! Named component views over the four lanes of a [`Vec4i`](super::Vec4i).

use std::fmt;

/// Spatial view of a vector: lanes 0..3 as `x, y, z, w`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Xyzw {
    /// Lane 0
    pub x: i32,
    /// Lane 1
    pub y: i32,
    /// Lane 2
    pub z: i32,
    /// Lane 3
    pub w: i32,
}

/// Color view of a vector: lanes 0..3 as `r, g, b, a`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Lane 0
    pub r: i32,
    /// Lane 1
    pub g: i32,
    /// Lane 2
    pub b: i32,
    /// Lane 3
    pub a: i32,
}

// Both views are reinterpreted from `[i32; 4]` in place.
const _: () = {
    assert!(std::mem::size_of::<Xyzw>() == std::mem::size_of::<[i32; 4]>());
    assert!(std::mem::align_of::<Xyzw>() <= std::mem::align_of::<[i32; 4]>());
    assert!(std::mem::size_of::<Rgba>() == std::mem::size_of::<[i32; 4]>());
    assert!(std::mem::align_of::<Rgba>() <= std::mem::align_of::<[i32; 4]>());
};

impl fmt::Display for Xyzw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {}, y: {}, z: {}, w: {})", self.x, self.y, self.z, self.w)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r: {}, g: {}, b: {}, a: {})", self.r, self.g, self.b, self.a)
    }
}

#[inline(always)]
pub(super) fn xyzw_ref(lanes: &[i32; 4]) -> &Xyzw {
    // SAFETY: `Xyzw` is `repr(C)` with four `i32` fields, so it has the same
    // size and no stricter alignment than `[i32; 4]`; every bit pattern is valid.
    unsafe { &*(lanes as *const [i32; 4] as *const Xyzw) }
}

#[inline(always)]
pub(super) fn xyzw_mut(lanes: &mut [i32; 4]) -> &mut Xyzw {
    // SAFETY: see `xyzw_ref`; the exclusive borrow is carried over unchanged.
    unsafe { &mut *(lanes as *mut [i32; 4] as *mut Xyzw) }
}

#[inline(always)]
pub(super) fn rgba_ref(lanes: &[i32; 4]) -> &Rgba {
    // SAFETY: same layout argument as `xyzw_ref`.
    unsafe { &*(lanes as *const [i32; 4] as *const Rgba) }
}

#[inline(always)]
pub(super) fn rgba_mut(lanes: &mut [i32; 4]) -> &mut Rgba {
    // SAFETY: same layout argument as `xyzw_ref`.
    unsafe { &mut *(lanes as *mut [i32; 4] as *mut Rgba) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_layout() {
        assert_eq!(std::mem::size_of::<Xyzw>(), 16);
        assert_eq!(std::mem::size_of::<Rgba>(), 16);
    }

    #[test]
    fn test_views_share_storage() {
        let mut lanes = [1, 2, 3, 4];
        xyzw_mut(&mut lanes).z = 30;
        assert_eq!(rgba_ref(&lanes).b, 30);

        rgba_mut(&mut lanes).a = -4;
        assert_eq!(xyzw_ref(&lanes).w, -4);
        assert_eq!(lanes, [1, 2, 30, -4]);
    }

    #[test]
    fn test_view_display() {
        let lanes = [1, -2, 3, 4];
        assert_eq!(xyzw_ref(&lanes).to_string(), "(x: 1, y: -2, z: 3, w: 4)");
        assert_eq!(rgba_ref(&lanes).to_string(), "(r: 1, g: -2, b: 3, a: 4)");
    }
}
