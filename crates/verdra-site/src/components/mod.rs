//! Site components

mod cards;
mod faq;
mod footer;
mod hero;
mod nav;
mod results;
mod signup;

pub use cards::*;
pub use faq::{Faq, FaqItem};
pub use footer::Footer;
pub use hero::{Hero, SavingsBanner, ScanForm};
pub use nav::MarketingNav;
pub use results::AnalysisResults;
pub use signup::Signup;
