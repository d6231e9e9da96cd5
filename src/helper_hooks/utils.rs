use crate::prelude::*;

use crate::utils::CCStr;

/// A resource whose loader can fail with a displayable message
pub type FResource<T> = Resource<Result<T, CCStr>>;
