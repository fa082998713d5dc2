use clap::Args;

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Space-separated terms; omit to list the first bookmarks found.
    #[arg(allow_hyphen_values = true, num_args = 0.., trailing_var_arg = true)]
    pub terms: Vec<String>,
}

impl QueryArgs {
    #[must_use]
    pub fn query(&self) -> String {
        self.terms.join(" ")
    }
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    pub url: String,
}
