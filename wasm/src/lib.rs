use chembal::geometry::{heuristic, NoStructureSource};
use chembal::{balance, solve_reaction};
use wasm_bindgen::prelude::*;

// Results are plain strings; the first char is 1 on success and 0 on error.

#[wasm_bindgen]
/// Balance an equation and return the balanced string
pub fn equation_io(equation: &str) -> String {
    match balance(equation) {
        Ok(balanced) => format!("1{balanced}"),
        Err(err) => format!("0{err}"),
    }
}

#[wasm_bindgen]
/// Estimated geometry of a single molecule, as JSON prefixed by 1
pub fn molecule_json(formula: &str) -> String {
    match serde_json::to_string(&heuristic::generate(formula)) {
        Ok(json) => format!("1{json}"),
        Err(err) => format!("0{err}"),
    }
}

#[wasm_bindgen]
/// Balanced reaction with the geometry of every species, as JSON prefixed by 1
pub fn reaction_json(equation: &str) -> String {
    match solve_reaction(equation, &NoStructureSource) {
        Ok(report) => match serde_json::to_string(&report) {
            Ok(json) => format!("1{json}"),
            Err(err) => format!("0{err}"),
        },
        Err(err) => format!("0{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_equation_is_prefixed() {
        assert_eq!(equation_io("H2 + O2 -> H2O"), "12H2 + O2 -> 2H2O");
    }

    #[test]
    fn error_is_prefixed() {
        let output = equation_io("H2 + O2");
        assert!(output.starts_with('0'));
        assert!(output.contains("H2 + O2"));
    }

    #[test]
    fn molecule_is_prefixed_json() {
        let output = molecule_json("CH4");
        assert!(output.starts_with('1'));
        let value: serde_json::Value = serde_json::from_str(&output[1..]).unwrap();
        assert_eq!(value["atoms"].as_array().unwrap().len(), 5);
        assert_eq!(value["bonds"][0]["order"], "single");

        let empty: serde_json::Value = serde_json::from_str(&molecule_json("Ca(OH")[1..]).unwrap();
        assert_eq!(empty["atoms"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn reaction_json_has_report() {
        let output = reaction_json("Fe + O2 -> Fe2O3");
        let value: serde_json::Value = serde_json::from_str(&output[1..]).unwrap();
        assert_eq!(value["balanced"], "4Fe + 3O2 -> 2Fe2O3");
        assert!(reaction_json("A -> B").starts_with('0'));
    }
}
