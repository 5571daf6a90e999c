//! Path <-> route mapping. `/` is the chart, `/trace/{glyph}` the tracing
//! page; anything else falls back to the chart.

use percent_encoding::percent_decode_str;

const TRACE_PREFIX: &str = "/trace/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Chart,
    Trace(String),
}

impl Route {
    /// Parse a location pathname. The glyph segment is percent-decoded since
    /// browsers report non-ASCII path segments encoded.
    pub fn from_path(pathname: &str) -> Route {
        let path = pathname.trim();
        let Some(rest) = path.strip_prefix(TRACE_PREFIX) else {
            return Route::Chart;
        };
        let segment = rest.trim_end_matches('/');
        if segment.is_empty() || segment.contains('/') {
            return Route::Chart;
        }
        let glyph = percent_decode_str(segment)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| segment.to_string());
        Route::Trace(glyph)
    }

    /// Path for pushing onto history. The raw glyph is used; the browser
    /// encodes it.
    pub fn to_path(&self) -> String {
        match self {
            Route::Chart => "/".to_string(),
            Route::Trace(glyph) => format!("{TRACE_PREFIX}{glyph}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chart_paths() {
        assert_eq!(Route::from_path("/"), Route::Chart);
        assert_eq!(Route::from_path(""), Route::Chart);
        assert_eq!(Route::from_path("/unknown"), Route::Chart);
        assert_eq!(Route::from_path("/trace/"), Route::Chart);
        assert_eq!(Route::from_path("/trace/a/b"), Route::Chart);
    }

    #[test]
    fn parses_raw_and_encoded_glyphs() {
        assert_eq!(Route::from_path("/trace/人"), Route::Trace("人".into()));
        assert_eq!(
            Route::from_path("/trace/%E4%BA%BA"),
            Route::Trace("人".into())
        );
        assert_eq!(Route::from_path("/trace/犬/"), Route::Trace("犬".into()));
    }

    #[test]
    fn to_path_uses_raw_glyph() {
        assert_eq!(Route::Chart.to_path(), "/");
        assert_eq!(Route::Trace("人".into()).to_path(), "/trace/人");
        let r = Route::Trace("水".into());
        assert_eq!(Route::from_path(&r.to_path()), r);
    }
}
