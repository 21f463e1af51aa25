//! Configuration for debug output of sparse matrices

/// Controls how much of a matrix [`SparseMatrix::dump`](crate::SparseMatrix::dump)
/// and the `Debug` impl print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintConfig {
    /// Maximum number of stored elements to list before eliding the rest
    pub max_elements: usize,

    /// Whether to include the default value in the header
    pub show_default: bool,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            max_elements: 10,
            show_default: true,
        }
    }
}

impl PrintConfig {
    /// A config that lists every stored element
    pub fn unlimited() -> Self {
        Self {
            max_elements: usize::MAX,
            ..Self::default()
        }
    }

    /// Reads overrides from the environment
    ///
    /// `SPARSEMAT_PRINT_LIMIT` sets `max_elements` (`all` lists everything),
    /// `SPARSEMAT_PRINT_DEFAULT=0` hides the default value.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        match std::env::var("SPARSEMAT_PRINT_LIMIT").as_deref() {
            Ok("all") => config.max_elements = usize::MAX,
            Ok(limit) => {
                if let Ok(n) = limit.parse() {
                    config.max_elements = n;
                }
            }
            Err(_) => {}
        }

        if let Ok("0") | Ok("false") = std::env::var("SPARSEMAT_PRINT_DEFAULT").as_deref() {
            config.show_default = false;
        }

        config
    }
}
