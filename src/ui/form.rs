//! The two input fields and which one has focus.

use crate::summary::SummarizeRequest;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    ArticleText,
    ArticleUrl,
}

#[derive(Debug, Default)]
pub struct Form {
    pub article_text: String,
    pub article_url: String,
    pub focus: Field,
}

impl Form {
    /// Current field values, read as-is
    pub fn request(&self) -> SummarizeRequest {
        SummarizeRequest::new(self.article_text.clone(), self.article_url.clone())
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::ArticleText => &mut self.article_text,
            Field::ArticleUrl => &mut self.article_url,
        }
    }

    pub fn push(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn paste(&mut self, text: &str) {
        self.focused_mut().push_str(text);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus(&mut self, field: Field) {
        self.focus = field;
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Field::ArticleText => Field::ArticleUrl,
            Field::ArticleUrl => Field::ArticleText,
        };
    }

    // Two fields, so previous and next are the same move.
    pub fn focus_prev(&mut self) {
        self.focus_next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut form = Form::default();
        form.paste("Hello world");
        form.focus_next();
        form.push('x');
        form.backspace();

        assert_eq!(form.request(), SummarizeRequest::new("Hello world", ""));
    }

    #[test]
    fn values_are_not_trimmed() {
        let mut form = Form::default();
        form.paste("  spaced \n");
        form.focus(Field::ArticleUrl);
        form.paste(" https://example.com ");

        let request = form.request();
        assert_eq!(request.article_text, "  spaced \n");
        assert_eq!(request.article_url, " https://example.com ");
    }

    #[test]
    fn backspace_on_empty_field_is_harmless() {
        let mut form = Form::default();
        form.backspace();
        assert!(form.article_text.is_empty());
    }
}
