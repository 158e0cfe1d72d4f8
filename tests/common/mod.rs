#![allow(dead_code)]

use skaf::config::CustomVariable;
use skaf::error::{Error, Result};
use skaf::prompt::Prompter;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// Prompter answering from a fixed script, recording what was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<String>>,
    pub asked: RefCell<Vec<(String, Option<String>)>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, variable: &CustomVariable, default: Option<String>) -> Result<String> {
        self.asked.borrow_mut().push((variable.name.clone(), default));
        self.answers.borrow_mut().pop_front().ok_or_else(|| {
            Error::IoError(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("no scripted answer for '{}'", variable.name),
            ))
        })
    }
}

/// Writes a filesystem template under `library/name`.
pub fn write_template(
    library: &Path,
    name: &str,
    properties: &str,
    documents: &[(&str, &str)],
) -> PathBuf {
    let root = library.join(name);
    let content_root = root.join("template");
    fs::create_dir_all(&content_root).unwrap();
    fs::write(root.join("template_properties.yaml"), properties).unwrap();
    for (path, content) in documents {
        let path = content_root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    root
}
