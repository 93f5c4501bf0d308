pub mod contact;
pub mod respondent;
pub mod response_set;
pub mod result;
