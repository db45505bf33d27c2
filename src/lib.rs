pub mod dictionary;
pub mod error;
pub mod typed;

use std::collections::HashMap;

use std::sync::RwLock;

use crate::dictionary::TypedDictionary;

lazy_static::lazy_static! {
    pub static ref DICTIONARIES: RwLock<HashMap<String, TypedDictionary>> = RwLock::new(HashMap::new());
}

// Returns the existing dictionary with given name or creates a new one
// if the dictionary does not exist yet.
pub fn dictionary(name: String) -> TypedDictionary {
    let dictionaries = DICTIONARIES.read().unwrap();
    if let Some(dictionary) = dictionaries.get(&name) {
        dictionary.to_owned()
    } else {
        drop(dictionaries);
        let mut dictionaries = DICTIONARIES.write().unwrap();
        if dictionaries.contains_key(&name) {
            return dictionaries.get(&name).unwrap().to_owned();
        }
        let dictionary = TypedDictionary::new();
        dictionaries.insert(name, dictionary.clone());
        dictionary
    }
}
