use image::DynamicImage;

/// One call to an image generation backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Full prompt, style lock included.
    pub prompt: String,
    /// Backend model label.
    pub model: String,
    /// Requested number of images.
    pub count: u32,
    /// Backend size hint such as `1792x1024` or `2K`.
    pub size_hint: String,
    /// Ask for a transparent background where supported.
    pub transparent: bool,
}

/// Opaque source of raw bitmaps.
///
/// Implementations may return fewer images than requested; callers record what they get.
pub trait ImageGenerator {
    /// Produce zero or more bitmaps for `request`. Blocking.
    fn generate(&self, request: &GenerationRequest) -> anyhow::Result<Vec<DynamicImage>>;
}

impl<G: ImageGenerator + ?Sized> ImageGenerator for Box<G> {
    fn generate(&self, request: &GenerationRequest) -> anyhow::Result<Vec<DynamicImage>> {
        (**self).generate(request)
    }
}
