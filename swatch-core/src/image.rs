use vello::kurbo::Size;

/// An already-decoded image owned by the asset loader.
///
/// Elements only carry the handle; the render backend maps `id` back to pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle {
    id: String,
    width: u32,
    height: u32,
}

impl ImageHandle {
    /// Create a handle for an image of the given pixel size.
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }

    /// Backend identifier of the image.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Natural size in pixels.
    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}
