use derive_more::Constructor;

pub mod actor_id;
pub mod units;

pub use actor_id::ActorId;

/// Size of an image or sub-image in pixels.
#[derive(Constructor, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize<T> {
    pub w: T,
    pub h: T,
}

impl<T> From<(T, T)> for ImageSize<T> {
    fn from((w, h): (T, T)) -> Self {
        Self::new(w, h)
    }
}

/// An axis-aligned rectangle given by its top-left corner and extents.
#[derive(Default, Constructor, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub w: T,
    pub h: T,
}

impl<T> From<(T, T, T, T)> for Rect<T> {
    fn from((x, y, w, h): (T, T, T, T)) -> Self {
        Self::new(x, y, w, h)
    }
}

impl<T: Default> From<ImageSize<T>> for Rect<T> {
    fn from(value: ImageSize<T>) -> Self {
        Self::new(T::default(), T::default(), value.w, value.h)
    }
}
