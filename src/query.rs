use std::fmt;

use crate::args::{Args, SortField, SortOrder};

/// Search qualifier keys, declared in the order terms are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Qualifier {
    Created,
    Pushed,
    Fork,
    Forks,
    In,
    Language,
    License,
    Org,
    User,
    Size,
    Stars,
    Topic,
    Archived,
}

impl Qualifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Qualifier::Created => "created",
            Qualifier::Pushed => "pushed",
            Qualifier::Fork => "fork",
            Qualifier::Forks => "forks",
            Qualifier::In => "in",
            Qualifier::Language => "language",
            Qualifier::License => "license",
            Qualifier::Org => "org",
            Qualifier::User => "user",
            Qualifier::Size => "size",
            Qualifier::Stars => "stars",
            Qualifier::Topic => "topic",
            Qualifier::Archived => "archived",
        }
    }
}

/// `sort=` / `order=` parameters. An order only exists alongside a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub field: SortField,
    pub order: Option<SortOrder>,
}

/// A repository search: free-text keyword, qualifier terms and sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    keyword: Option<String>,
    terms: Vec<(Qualifier, String)>,
    sort: Option<SortDirective>,
}

impl SearchQuery {
    /// Collect every meaningful filter from the parsed options.
    pub fn from_args(args: &Args) -> Self {
        let mut query = SearchQuery {
            keyword: non_empty(&args.keyword).map(str::to_owned),
            ..Default::default()
        };

        query.push_text(Qualifier::Created, &args.created);
        query.push_text(Qualifier::Pushed, &args.pushed);
        if let Some(fork) = args.fork {
            query.push(Qualifier::Fork, fork.as_str());
        }
        // 0 forks is a real filter, only negatives mean unset
        if let Some(forks) = args.forks.filter(|n| *n >= 0) {
            query.push(Qualifier::Forks, forks.to_string());
        }

        let locations: Vec<&str> = [
            (args.in_name, "name"),
            (args.in_description, "description"),
            (args.in_readme, "readme"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();
        if !locations.is_empty() {
            query.push(Qualifier::In, locations.join(","));
        }

        query.push_text(Qualifier::Language, &args.language);
        query.push_text(Qualifier::License, &args.license);
        query.push_text(Qualifier::Org, &args.org);
        query.push_text(Qualifier::User, &args.username);
        // size and stars start counting at 1
        if let Some(size) = args.size.filter(|n| *n > 0) {
            query.push(Qualifier::Size, size.to_string());
        }
        if let Some(stars) = args.stars.filter(|n| *n > 0) {
            query.push(Qualifier::Stars, stars.to_string());
        }
        query.push_text(Qualifier::Topic, &args.topic);
        if args.archived {
            query.push(Qualifier::Archived, "true");
        }

        query.sort = args.sort.map(|field| SortDirective {
            field,
            order: args.order,
        });

        query
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn terms(&self) -> &[(Qualifier, String)] {
        &self.terms
    }

    /// Value of a qualifier, if the query carries it.
    pub fn term(&self, qualifier: Qualifier) -> Option<&str> {
        self.terms
            .iter()
            .find(|(q, _)| *q == qualifier)
            .map(|(_, v)| v.as_str())
    }

    pub fn sort(&self) -> Option<SortDirective> {
        self.sort
    }

    /// Render the URL query string, e.g. `q=foo+language:Go&sort=stars`.
    ///
    /// The keyword is written verbatim, without any escaping.
    pub fn to_query_string(&self) -> String {
        self.to_string()
    }

    fn push(&mut self, qualifier: Qualifier, value: impl Into<String>) {
        self.terms.push((qualifier, value.into()));
    }

    fn push_text(&mut self, qualifier: Qualifier, value: &Option<String>) {
        if let Some(value) = non_empty(value) {
            self.push(qualifier, value);
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_terms = self.keyword.is_some() || !self.terms.is_empty();

        if has_terms {
            f.write_str("q=")?;
            let mut first = true;
            if let Some(keyword) = &self.keyword {
                f.write_str(keyword)?;
                first = false;
            }
            for (qualifier, value) in &self.terms {
                if !first {
                    f.write_str("+")?;
                }
                write!(f, "{}:{}", qualifier.as_str(), value)?;
                first = false;
            }
        }

        if let Some(sort) = &self.sort {
            if has_terms {
                f.write_str("&")?;
            }
            write!(f, "sort={}", sort.field.as_str())?;
            if let Some(order) = sort.order {
                write!(f, "&order={}", order.as_str())?;
            }
        }

        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
