use std::sync::Arc;

use buildcheck_core::{Checker, Config};
use buildcheck_gradle::WrapperCheck;
use buildcheck_style::{DefaultVisibilityPolicy, FsLineSeparatorConverter, LineSeparatorCheck};

// checker list

pub fn get_checkers(config: &Config) -> Vec<Box<dyn Checker>> {
    vec![
        Box::new(WrapperCheck::new(config.gradle.clone())),
        Box::new(LineSeparatorCheck::new(
            config.line_separator,
            Box::new(DefaultVisibilityPolicy::new(&config.ignore)),
            Arc::new(FsLineSeparatorConverter),
        )),
    ]
}
