//! This module maps device classes to gamuts. Lights of different generations have different
//! primaries, so the gamut to fit a color into depends on which light it's for: the registry keeps
//! a table of named [`GamutTriangle`]s and a table assigning device model identifiers to them.
//!
//! [`GamutRegistry::builtin`] knows the three Hue gamuts and the models that use them. More can be
//! loaded from CSV, and every gamut is validated on the way in, so a degenerate triangle is rejected
//! when the configuration is loaded rather than silently misbehaving later.
//!
//! Gamut tables have the header `name,red_x,red_y,green_x,green_y,blue_x,blue_y`; model tables have
//! the header `model_id,gamut`.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::chromaticity::Chromaticity;
use crate::error::{Error, Result};
use crate::gamut::{GamutTriangle, GAMUT_A, GAMUT_B, GAMUT_C};

lazy_static! {
    static ref BUILTIN_MODELS: HashMap<&'static str, &'static str> = hashmap! {
        "LLC001" => "A",
        "LLC005" => "A",
        "LLC006" => "A",
        "LLC007" => "A",
        "LLC010" => "A",
        "LLC011" => "A",
        "LLC012" => "A",
        "LLC013" => "A",
        "LLC014" => "A",
        "LST001" => "A",
        "LCT001" => "B",
        "LCT002" => "B",
        "LCT003" => "B",
        "LCT007" => "B",
        "LLM001" => "B",
        "LCT010" => "C",
        "LCT011" => "C",
        "LCT012" => "C",
        "LCT014" => "C",
        "LCT015" => "C",
        "LCT016" => "C",
        "LLC020" => "C",
        "LST002" => "C",
    };
    static ref BUILTIN: GamutRegistry = {
        let gamuts = hashmap! {
            "A".to_string() => GAMUT_A,
            "B".to_string() => GAMUT_B,
            "C".to_string() => GAMUT_C,
        };
        let models = BUILTIN_MODELS
            .iter()
            .map(|(model, gamut)| (model.to_string(), gamut.to_string()))
            .collect();
        GamutRegistry {
            gamuts,
            models,
            default_name: "C".to_string(),
            default_gamut: GAMUT_C,
        }
    };
}

#[derive(Debug, Deserialize)]
struct GamutRecord {
    name: String,
    red_x: f64,
    red_y: f64,
    green_x: f64,
    green_y: f64,
    blue_x: f64,
    blue_y: f64,
}

impl GamutRecord {
    fn triangle(&self) -> GamutTriangle {
        GamutTriangle::new(
            Chromaticity::new(self.red_x, self.red_y),
            Chromaticity::new(self.green_x, self.green_y),
            Chromaticity::new(self.blue_x, self.blue_y),
        )
    }
}

#[derive(Debug, Deserialize)]
struct ModelRecord {
    model_id: String,
    gamut: String,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// A table of named gamuts and of which device models use which gamut, with a default for models
/// it doesn't know.
///
/// # Example
/// ```
/// # use xygamut::registry::GamutRegistry;
/// # use xygamut::gamut::{GAMUT_B, GAMUT_C};
/// let mut registry = GamutRegistry::builtin();
/// assert_eq!(registry.gamut_for_model("LCT001"), &GAMUT_B);
/// // unknown models get the default
/// assert_eq!(registry.gamut_for_model("XYZ999"), &GAMUT_C);
///
/// let table = "name,red_x,red_y,green_x,green_y,blue_x,blue_y\n\
///              strip,0.68,0.31,0.18,0.69,0.15,0.06\n";
/// registry.load_gamuts(table.as_bytes()).unwrap();
/// registry.assign_model("STRIP01", "strip").unwrap();
/// assert_eq!(registry.gamut_name_for_model("STRIP01"), Some("strip"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GamutRegistry {
    gamuts: HashMap<String, GamutTriangle>,
    models: HashMap<String, String>,
    default_name: String,
    default_gamut: GamutTriangle,
}

impl Default for GamutRegistry {
    fn default() -> GamutRegistry {
        GamutRegistry::builtin()
    }
}

impl GamutRegistry {
    /// Makes a registry with a single gamut, which is also the default, and no model assignments.
    ///
    /// # Errors
    /// Fails if the gamut is degenerate or has a non-finite vertex.
    pub fn new(default_name: &str, default_gamut: GamutTriangle) -> Result<GamutRegistry> {
        default_gamut.validate(default_name)?;
        Ok(GamutRegistry {
            gamuts: hashmap! { default_name.to_string() => default_gamut },
            models: HashMap::new(),
            default_name: default_name.to_string(),
            default_gamut,
        })
    }

    /// The Hue registry: gamuts "A", "B", and "C", the models known to use each, and "C" as the
    /// default.
    pub fn builtin() -> GamutRegistry {
        BUILTIN.clone()
    }

    /// Looks up a gamut by name.
    pub fn gamut(&self, name: &str) -> Option<&GamutTriangle> {
        self.gamuts.get(name)
    }

    /// The gamut used for models without an assignment.
    pub fn default_gamut(&self) -> &GamutTriangle {
        &self.default_gamut
    }

    /// The name of the default gamut.
    pub fn default_gamut_name(&self) -> &str {
        &self.default_name
    }

    /// Makes a registered gamut the default.
    ///
    /// # Errors
    /// [`Error::UnknownGamut`] if no gamut has that name.
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        let gamut = *self
            .gamuts
            .get(name)
            .ok_or_else(|| Error::UnknownGamut(name.to_string()))?;
        self.default_name = name.to_string();
        self.default_gamut = gamut;
        Ok(())
    }

    /// Adds a gamut, or replaces the one with the same name.
    ///
    /// # Errors
    /// Fails, leaving the registry unchanged, if the gamut is degenerate or has a non-finite
    /// vertex.
    pub fn insert_gamut(&mut self, name: &str, gamut: GamutTriangle) -> Result<()> {
        gamut.validate(name)?;
        if name == self.default_name {
            self.default_gamut = gamut;
        }
        self.gamuts.insert(name.to_string(), gamut);
        Ok(())
    }

    /// Assigns a device model to a registered gamut, replacing any previous assignment.
    ///
    /// # Errors
    /// [`Error::UnknownGamut`] if no gamut has that name.
    pub fn assign_model(&mut self, model_id: &str, gamut_name: &str) -> Result<()> {
        if !self.gamuts.contains_key(gamut_name) {
            return Err(Error::UnknownGamut(gamut_name.to_string()));
        }
        self.models
            .insert(model_id.to_string(), gamut_name.to_string());
        Ok(())
    }

    /// The name of the gamut a model is assigned to, if it has an assignment.
    pub fn gamut_name_for_model(&self, model_id: &str) -> Option<&str> {
        self.models.get(model_id).map(String::as_str)
    }

    /// The gamut for a device model, falling back to the default gamut for models without an
    /// assignment.
    pub fn gamut_for_model(&self, model_id: &str) -> &GamutTriangle {
        match self
            .gamut_name_for_model(model_id)
            .and_then(|name| self.gamuts.get(name))
        {
            Some(gamut) => gamut,
            None => {
                warn!(
                    "no gamut known for model {:?}, using gamut {:?}",
                    model_id, self.default_name
                );
                &self.default_gamut
            }
        }
    }

    /// Loads named gamuts from CSV. Every row is validated before any of them is added, so a bad
    /// row leaves the registry as it was. Returns the number of gamuts loaded.
    ///
    /// # Errors
    /// [`Error::Csv`] on malformed input, and the errors of [`GamutTriangle::validate`] for
    /// unusable triangles.
    pub fn load_gamuts<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut loaded = Vec::new();
        for result in csv_reader(reader).deserialize() {
            let record: GamutRecord = result?;
            let triangle = record.triangle();
            triangle.validate(&record.name)?;
            loaded.push((record.name, triangle));
        }
        let count = loaded.len();
        for (name, triangle) in loaded {
            debug!("registered gamut {:?}: {:?}", name, triangle);
            if name == self.default_name {
                self.default_gamut = triangle;
            }
            self.gamuts.insert(name, triangle);
        }
        info!("loaded {} gamut(s)", count);
        Ok(count)
    }

    /// Like [`load_gamuts`](GamutRegistry::load_gamuts), reading from a file.
    ///
    /// # Errors
    /// [`Error::Io`] if the file can't be opened, and anything `load_gamuts` returns.
    pub fn load_gamuts_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let file = File::open(path)?;
        self.load_gamuts(file)
    }

    /// Loads model assignments from CSV. As with gamuts, nothing is assigned unless every row
    /// refers to a registered gamut. Returns the number of assignments loaded.
    ///
    /// # Errors
    /// [`Error::Csv`] on malformed input, and [`Error::UnknownGamut`] for rows naming a gamut
    /// that isn't registered.
    pub fn load_models<R: Read>(&mut self, reader: R) -> Result<usize> {
        let mut loaded = Vec::new();
        for result in csv_reader(reader).deserialize() {
            let record: ModelRecord = result?;
            if !self.gamuts.contains_key(&record.gamut) {
                return Err(Error::UnknownGamut(record.gamut));
            }
            loaded.push((record.model_id, record.gamut));
        }
        let count = loaded.len();
        self.models.extend(loaded);
        info!("loaded {} model assignment(s)", count);
        Ok(count)
    }

    /// Like [`load_models`](GamutRegistry::load_models), reading from a file.
    ///
    /// # Errors
    /// [`Error::Io`] if the file can't be opened, and anything `load_models` returns.
    pub fn load_models_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let file = File::open(path)?;
        self.load_models(file)
    }
}
