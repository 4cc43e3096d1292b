#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Span {
    Exact(usize),  // index of raw args, including flags
    FirstArg,
    End,
    NthArg(usize),  // index of positional args, not including flags

    // (joined args, start, end)
    Rendered((String, usize, usize)),
}

impl Span {
    pub(crate) fn render(&self, args: &[String]) -> Self {
        let rendered_args = args.iter().map(
            |arg| if arg.contains([' ', '"', '\'', '\n']) {
                format!("{arg:?}")
            } else {
                arg.to_string()
            }
        ).collect::<Vec<_>>();

        let joined_args = rendered_args.join(" ");

        // no args, or only empty ones (`suku encode ""`)
        if joined_args.is_empty() {
            return Span::Rendered((String::from(" "), 0, 1));
        }

        let positional_indices = args.iter().enumerate().filter(
            |(_, arg)| !arg.starts_with("--")
        ).map(
            |(index, _)| index
        ).collect::<Vec<_>>();

        let selected_index = match self {
            Span::Exact(n) => (*n).min(rendered_args.len() - 1),
            Span::FirstArg => positional_indices.first().copied().unwrap_or(0),
            Span::NthArg(n) => positional_indices.get(*n).copied().unwrap_or(0),
            Span::End => {
                return Span::Rendered((joined_args.clone(), joined_args.len() - 1, joined_args.len()));
            },
            Span::Rendered(_) => {
                return self.clone();
            },
        };

        // each arg is followed by a space
        let start = rendered_args[..selected_index].iter().map(|arg| arg.len() + 1).sum::<usize>();
        let end = start + rendered_args[selected_index].len();

        Span::Rendered((joined_args, start, end))
    }

    pub fn unwrap_rendered(&self) -> (String, usize, usize) {
        match self {
            Span::Rendered((span, start, end)) => (span.to_string(), *start, *end),
            _ => panic!("span is not rendered yet: {self:?}"),
        }
    }
}

/// ```nohighlight
/// suku encode --vocab
///                   ^
/// ```
pub fn underline_span(prefix: &str, args: &str, start: usize, end: usize) -> String {
    format!(
        "{prefix}{args}\n{}{}{}",
        " ".repeat(prefix.len() + start),
        "^".repeat(end.saturating_sub(start).max(1)),
        " ".repeat(args.len().saturating_sub(end)),
    )
}
