//! URL builders for the Unsplash Source API.
//!
//! The unauthenticated source.unsplash.com endpoints answer a GET with a
//! redirect to an actual photo. Keywords go into the query string as a
//! comma-separated list (not key=value pairs), dimensions as a `WxH`
//! path segment. These functions only build well-formed URLs; the
//! request itself is the downloader's job.

use url::form_urlencoded::byte_serialize;

use crate::domain::model::Dimensions;

const BASE_URL: &str = "https://source.unsplash.com";

/// A random photo, optionally filtered by keywords and sized.
pub fn random_photo(keywords: &[String], dimensions: Option<Dimensions>) -> String {
    build(&["random"], keywords, dimensions)
}

/// A random photo from the curated "featured" pool.
pub fn random_featured_photo(keywords: &[String], dimensions: Option<Dimensions>) -> String {
    build(&["featured"], keywords, dimensions)
}

/// A random photo from a specific user's library.
pub fn random_from_user(user_id: &str, dimensions: Option<Dimensions>) -> String {
    build(&["user", &encode(user_id)], &[], dimensions)
}

/// A random photo from a collection.
pub fn random_from_collection(collection_id: &str, dimensions: Option<Dimensions>) -> String {
    build(&["collection", &encode(collection_id)], &[], dimensions)
}

/// One specific photo by id.
pub fn specific_photo(photo_id: &str, dimensions: Option<Dimensions>) -> String {
    build(&[&encode(photo_id)], &[], dimensions)
}

fn build(path: &[&str], keywords: &[String], dimensions: Option<Dimensions>) -> String {
    let mut segments: Vec<String> = vec![BASE_URL.to_string()];
    segments.extend(path.iter().map(|s| s.to_string()));

    if let Some(dims) = dimensions {
        segments.push(dims.to_string());
    }

    let mut url = segments.join("/");

    if !keywords.is_empty() {
        let query: Vec<String> = keywords.iter().map(|k| encode(k)).collect();
        url.push('?');
        url.push_str(&query.join(","));
    }

    url
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    const DIMS: Dimensions = Dimensions {
        width: 1920,
        height: 1080,
    };

    #[test]
    fn test_random_photo_urls() {
        assert_eq!(random_photo(&[], None), "https://source.unsplash.com/random");
        assert_eq!(
            random_photo(&kw(&["pizza", "donkey"]), None),
            "https://source.unsplash.com/random?pizza,donkey"
        );
        assert_eq!(
            random_photo(&[], Some(DIMS)),
            "https://source.unsplash.com/random/1920x1080"
        );
        assert_eq!(
            random_photo(&kw(&["pizza"]), Some(DIMS)),
            "https://source.unsplash.com/random/1920x1080?pizza"
        );
    }

    #[test]
    fn test_featured_photo_urls() {
        assert_eq!(
            random_featured_photo(&kw(&["water", "lightning"]), Some(DIMS)),
            "https://source.unsplash.com/featured/1920x1080?water,lightning"
        );
    }

    #[test]
    fn test_user_collection_and_specific_urls() {
        assert_eq!(
            random_from_user("timmy", None),
            "https://source.unsplash.com/user/timmy"
        );
        assert_eq!(
            random_from_collection("12345", Some(DIMS)),
            "https://source.unsplash.com/collection/12345/1920x1080"
        );
        assert_eq!(
            specific_photo("ashgavdwe", None),
            "https://source.unsplash.com/ashgavdwe"
        );
    }

    #[test]
    fn test_keywords_are_encoded() {
        // spaces become '+', shell-hostile input stays inert
        assert_eq!(
            random_photo(&kw(&["new york", "; DROP TABLES;"]), None),
            "https://source.unsplash.com/random?new+york,%3B+DROP+TABLES%3B"
        );
    }
}
