// MIT/Apache2 License

/// Features that are enabled on the [`Surface`](super::Surface).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SurfaceFeatures {
    /// Edges of shapes and clips are smoothed.
    pub anti_aliasing: bool,
    /// `translate()` and `skew()` are available.
    pub transforms: bool,
    /// `draw_text()` is available.
    pub text: bool,
    /// `clip_out_path()` and path clips other than rectangles are available.
    pub path_clipping: bool,
}
