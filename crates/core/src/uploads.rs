//! Media bucket names, accepted file types and stored-file naming.

use std::str::FromStr;

use rand::Rng;

use crate::error::CoreError;

/// Default upload size ceiling (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov"];

/// A named collection of uploaded media with public URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    ProjectImages,
    TestimonialAvatars,
    HeroMedia,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [
        Bucket::ProjectImages,
        Bucket::TestimonialAvatars,
        Bucket::HeroMedia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::ProjectImages => "project-images",
            Bucket::TestimonialAvatars => "testimonial-avatars",
            Bucket::HeroMedia => "hero-media",
        }
    }

    fn accepts_video(self) -> bool {
        matches!(self, Bucket::HeroMedia)
    }

    /// Lowercased extension of `file_name` if this bucket accepts it.
    pub fn accepted_extension(self, file_name: &str) -> Result<String, CoreError> {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        let allowed = IMAGE_EXTENSIONS.contains(&ext.as_str())
            || (self.accepts_video() && VIDEO_EXTENSIONS.contains(&ext.as_str()));

        if !allowed {
            return Err(CoreError::Validation(format!(
                "Unsupported file type '.{ext}' for bucket '{}'",
                self.as_str()
            )));
        }
        Ok(ext)
    }
}

impl FromStr for Bucket {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown bucket '{s}'")))
    }
}

/// Stored name for an upload: `<unix-millis>-<random base36>.<ext>`.
pub fn generate_file_name(ext: &str, now_millis: i64) -> String {
    let suffix = to_base36(rand::rng().random::<u64>());
    format!("{now_millis}-{suffix}.{ext}")
}

/// The stored file name a public URL points at (its last path segment).
///
/// Returns `None` for names that could escape the bucket directory.
pub fn file_name_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let name = path.rsplit('/').next()?;
    if name.is_empty() || name == "." || name == ".." || name.contains('\\') {
        return None;
    }
    Some(name)
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn bucket_names_parse() {
        for bucket in Bucket::ALL {
            assert_eq!(bucket.as_str().parse::<Bucket>().unwrap(), bucket);
        }
        assert!("avatars".parse::<Bucket>().is_err());
    }

    #[test]
    fn videos_only_in_hero_media() {
        assert_eq!(Bucket::HeroMedia.accepted_extension("clip.MP4").unwrap(), "mp4");
        assert_matches!(
            Bucket::ProjectImages.accepted_extension("clip.mp4"),
            Err(CoreError::Validation(_))
        );
        assert_eq!(Bucket::ProjectImages.accepted_extension("cover.JPG").unwrap(), "jpg");
        assert!(Bucket::TestimonialAvatars.accepted_extension("noext").is_err());
    }

    #[test]
    fn generated_names_are_unique_and_keep_extension() {
        let a = generate_file_name("png", 1_700_000_000_000);
        let b = generate_file_name("png", 1_700_000_000_000);
        assert!(a.starts_with("1700000000000-"));
        assert!(a.ends_with(".png"));
        assert_ne!(a, b);
    }

    #[test]
    fn file_name_from_public_url() {
        assert_eq!(
            file_name_from_url("http://localhost:3000/storage/hero-media/1-abc.mp4"),
            Some("1-abc.mp4")
        );
        assert_eq!(file_name_from_url("http://x/storage/b/1-a.png?v=2"), Some("1-a.png"));
        assert_eq!(file_name_from_url("http://x/storage/b/"), None);
        assert_eq!(file_name_from_url("http://x/storage/.."), None);
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }
}
