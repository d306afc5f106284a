mod parser;

pub(crate) use parser::extract_prompts;
