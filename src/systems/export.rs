// saves the building as an obj file
// by walking the generated scene, grouped per material

use bevy::prelude::*;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::systems::mesh::BuildingParams;
use crate::systems::mesh::shape::building::generate_scene;
use crate::systems::mesh::shape::{Building, Face, MaterialRef};

// export event
#[derive(Event)]
pub struct ExportEvent {
    pub filename: String,
}

/// Write the building as Wavefront OBJ; returns the number of faces written
pub fn export_obj<W: Write>(building: &Building, writer: &mut W) -> Result<usize, Box<dyn std::error::Error>> {
    // OBJ header
    writeln!(writer, "# Exported from Building Generator")?;
    writeln!(writer, "# floors: {}, height: {}", building.floors.len(), building.top_y)?;

    let mut groups: BTreeMap<MaterialRef, Vec<Face>> = BTreeMap::new();
    for face in building.faces() {
        groups.entry(face.material()).or_default().push(face);
    }

    // OBJ format indices start at 1
    let mut vertex_offset = 1;
    let mut normal_offset = 1;
    let mut face_count = 0;

    for (material, faces) in &groups {
        writeln!(writer, "g {}", material.material().name)?;

        for face in faces {
            for v in face.vertices() {
                writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
            }
            let n = face.normal();
            writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;

            let corners: Vec<String> = (0..face.vertices().len())
                .map(|i| format!("{}//{}", vertex_offset + i, normal_offset))
                .collect();
            writeln!(writer, "f {}", corners.join(" "))?;

            vertex_offset += face.vertices().len();
            normal_offset += 1;
            face_count += 1;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(face_count)
}

pub fn export_obj_file(building: &Building, filename: &str) -> Result<usize, Box<dyn std::error::Error>> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);
    export_obj(building, &mut writer)
}

// handle export events
pub fn handle_export(
    mut events: EventReader<ExportEvent>,
    params: Res<BuildingParams>,
) {
    for event in events.read() {
        let building = generate_scene(&params);
        match export_obj_file(&building, &event.filename) {
            Ok(faces) => {
                info!("Exported {} faces to {}", faces, event.filename);
            }
            Err(e) => {
                error!("Export to {} failed: {}", event.filename, e);
            }
        }
    }
}
