use clap::{Parser, ValueEnum};

/// Default endpoint of the GitHub search API.
pub const DEFAULT_API_URI: &str = "https://api.github.com/search";

/// GitHub repository search CLI. Every flag maps to one search qualifier.
#[derive(Parser, Debug, Clone)]
#[clap(
    author,
    version,
    about,
    long_about = "Search GitHub repositories by keyword and qualifiers (dates, forks, language, license, stars, topic...) and print the matches as an aligned table."
)]
pub struct Args {
    /// URI for GitHub search API, without trailing slash.
    #[clap(
        long = "github-api-uri",
        env = "GITHUB_API_URI",
        default_value = DEFAULT_API_URI,
        hide_default_value = true,
        value_name = "URI"
    )]
    pub github_api_uri: String,

    /// Created date filter (format: yyyy-mm-dd).
    #[clap(short, long)]
    pub created: Option<String>,

    /// Last updated date filter (format: yyyy-mm-dd).
    #[clap(short, long)]
    pub pushed: Option<String>,

    /// Forked repository filter.
    #[clap(short, long, value_enum)]
    pub fork: Option<ForkPolicy>,

    /// Filter by the number of forks. Negative values are ignored.
    #[clap(short = 'F', long, value_name = "NUM", allow_negative_numbers = true)]
    pub forks: Option<i64>,

    /// Restrict to search just repository name.
    #[clap(short = 'N', long)]
    pub in_name: bool,

    /// Restrict to search just repository description.
    #[clap(short = 'D', long)]
    pub in_description: bool,

    /// Restrict to search just readme.
    #[clap(short = 'R', long)]
    pub in_readme: bool,

    /// Filter by language they're written in.
    #[clap(short, long)]
    pub language: Option<String>,

    /// Filter by license (use license keywords in GitHub).
    #[clap(short = 'L', long)]
    pub license: Option<String>,

    /// Organization which you want to search.
    #[clap(short, long)]
    pub org: Option<String>,

    /// Username which you want to search.
    #[clap(short, long = "user", value_name = "USER")]
    pub username: Option<String>,

    /// Finds repositories matching the given size (in KB).
    #[clap(short = 'S', long, value_name = "KB", allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Filter by the number of stars.
    #[clap(short, long, value_name = "NUM", allow_negative_numbers = true)]
    pub stars: Option<i64>,

    /// Filter by the specific topic.
    #[clap(short, long)]
    pub topic: Option<String>,

    /// Include archived repositories.
    #[clap(short, long)]
    pub archived: bool,

    /// Sort field (default: best match).
    #[clap(long, value_enum)]
    pub sort: Option<SortField>,

    /// Sort order if sort field is given (default: desc).
    #[clap(long, value_enum)]
    pub order: Option<SortOrder>,

    /// Free-text keyword placed in front of the qualifiers.
    #[clap(value_name = "KEYWORD")]
    pub keyword: Option<String>,
}

impl Args {
    /// Whether results were restricted to one language, which makes the
    /// per-row language column redundant.
    pub fn filters_language(&self) -> bool {
        self.language.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// Value of the `fork:` qualifier.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkPolicy {
    /// Include forked repositories.
    True,
    /// Return only forked repositories.
    Only,
}

impl ForkPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            ForkPolicy::True => "true",
            ForkPolicy::Only => "only",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Stars,
    Forks,
    Updated,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Stars => "stars",
            SortField::Forks => "forks",
            SortField::Updated => "updated",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}
