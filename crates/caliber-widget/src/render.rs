use std::fmt::Write;

use caliber_core::models::review::Review;

use crate::session::AdminSession;

pub const FILLED_STAR: char = '★';
pub const EMPTY_STAR: char = '☆';
pub const EMPTY_PLACEHOLDER: &str =
    r#"<p class="no-reviews">No reviews yet. Be the first to leave a review!</p>"#;

/// Escape `& < > " '` in one pass.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Filled stars followed by empty stars, five glyphs total.
pub fn star_glyphs(review: &Review) -> String {
    let (filled, empty) = review.stars();
    let mut out = String::with_capacity(5 * FILLED_STAR.len_utf8());
    out.extend(std::iter::repeat(FILLED_STAR).take(filled));
    out.extend(std::iter::repeat(EMPTY_STAR).take(empty));
    out
}

/// Markup for the whole list. Delete buttons appear only for an admin session
/// and carry a `data-role` for the host to bind, not an inline handler.
pub fn render_list(reviews: &[Review], session: &AdminSession) -> String {
    if reviews.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }
    let admin = session.is_admin();
    reviews
        .iter()
        .map(|review| render_card(review, admin))
        .collect()
}

fn render_card(review: &Review, admin: bool) -> String {
    let mut html = String::new();
    let card_class = if admin {
        "review-card admin-mode"
    } else {
        "review-card"
    };

    // Writing into a String cannot fail.
    let _ = write!(
        html,
        r#"<div class="{card_class}" data-review-id="{id}"><div class="review-header"><div class="review-author"><div class="review-author-name">{name}</div>"#,
        id = review.id,
        name = escape_html(&review.name),
    );
    if review.has_position() {
        let _ = write!(
            html,
            r#"<div class="review-author-position">{}</div>"#,
            escape_html(&review.position)
        );
    }
    let _ = write!(
        html,
        r#"</div><div class="review-rating">{stars}</div></div><p class="review-text">{text}</p><div class="review-footer"><span class="review-date">{date}</span>"#,
        stars = star_glyphs(review),
        text = escape_html(&review.text),
        date = escape_html(&review.date),
    );
    if admin {
        let _ = write!(
            html,
            r#"<button class="delete-review-btn" data-role="delete-review" data-review-id="{}">Delete</button>"#,
            review.id
        );
    }
    html.push_str("</div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SHARED_SECRET;
    use caliber_core::models::rating::Rating;
    use caliber_core::models::review::ReviewId;

    fn review(name: &str, position: &str, rating: u8, text: &str) -> Review {
        Review {
            id: ReviewId(42),
            name: name.to_string(),
            position: position.to_string(),
            rating: Rating::new(rating).unwrap(),
            text: text.to_string(),
            date: "January 5, 2025".to_string(),
        }
    }

    fn admin() -> AdminSession {
        let mut session = AdminSession::new();
        session.attempt_login(SHARED_SECRET).unwrap();
        session
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_empty_placeholder() {
        assert_eq!(render_list(&[], &AdminSession::new()), EMPTY_PLACEHOLDER);
        assert_eq!(render_list(&[], &admin()), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_star_glyphs() {
        for r in 1..=5u8 {
            let glyphs = star_glyphs(&review("a", "", r, "t"));
            let expected: String = std::iter::repeat('★')
                .take(r as usize)
                .chain(std::iter::repeat('☆').take(5 - r as usize))
                .collect();
            assert_eq!(glyphs, expected);
        }
    }

    #[test]
    fn test_script_input_never_raw() {
        let reviews = vec![review(
            "<script>alert(1)</script>",
            "<script>x</script>",
            3,
            "<script>document.cookie</script>",
        )];
        for session in [AdminSession::new(), admin()] {
            let html = render_list(&reviews, &session);
            assert!(!html.contains("<script>"));
            assert!(!html.contains("</script>"));
            assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        }
    }

    #[test]
    fn test_position_only_when_present() {
        let html = render_list(&[review("A", "", 4, "t")], &AdminSession::new());
        assert!(!html.contains("review-author-position"));

        let html = render_list(&[review("A", "Lead", 4, "t")], &AdminSession::new());
        assert!(html.contains(r#"<div class="review-author-position">Lead</div>"#));
    }

    #[test]
    fn test_delete_button_only_for_admin() {
        let reviews = vec![review("A", "", 4, "t")];

        let html = render_list(&reviews, &AdminSession::new());
        assert!(!html.contains("delete-review-btn"));
        assert!(!html.contains("admin-mode"));

        let html = render_list(&reviews, &admin());
        assert!(html.contains(r#"data-role="delete-review" data-review-id="42""#));
        assert!(html.contains("review-card admin-mode"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_cards_in_collection_order() {
        let mut first = review("First", "", 5, "t");
        first.id = ReviewId(2);
        let mut second = review("Second", "", 1, "t");
        second.id = ReviewId(1);

        let html = render_list(&[first, second], &AdminSession::new());
        let a = html.find("First").unwrap();
        let b = html.find("Second").unwrap();
        assert!(a < b);
        assert!(html.contains("January 5, 2025"));
    }
}
