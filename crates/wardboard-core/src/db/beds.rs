//! Bed, ward, and floor database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbError, DbResult};
use crate::models::{Bed, BedCatalog, BedState, BedStatus, BedType, Floor, Occupant, Ward};

/// Raw bed row, converted to a [`Bed`] outside the query closure so code
/// and JSON parsing report through [`DbError`].
struct BedRow {
    bed_id: String,
    room: String,
    bed_number: String,
    bed_type: String,
    status: String,
    occupant: Option<String>,
    price_per_day: i64,
    amenities: String,
    last_cleaned: Option<String>,
    notes: Option<String>,
}

impl BedRow {
    fn into_bed(self) -> DbResult<Bed> {
        let bed_type = BedType::from_code(&self.bed_type)
            .ok_or_else(|| DbError::Constraint(format!("unknown bed type: {}", self.bed_type)))?;
        let status = BedStatus::from_code(&self.status)
            .ok_or_else(|| DbError::Constraint(format!("unknown bed status: {}", self.status)))?;

        let state = match (status, self.occupant) {
            (BedStatus::Occupied, Some(json)) => {
                let occupant: Occupant = serde_json::from_str(&json)?;
                BedState::Occupied(occupant)
            }
            (BedStatus::Occupied, None) => {
                return Err(DbError::Constraint(format!(
                    "occupied bed {} has no occupant",
                    self.bed_id
                )))
            }
            (_, Some(_)) => {
                return Err(DbError::Constraint(format!(
                    "non-occupied bed {} has an occupant",
                    self.bed_id
                )))
            }
            (BedStatus::Available, None) => BedState::Available,
            (BedStatus::Reserved, None) => BedState::Reserved,
            (BedStatus::Maintenance, None) => BedState::Maintenance,
        };

        Ok(Bed {
            bed_id: self.bed_id,
            room: self.room,
            bed_number: self.bed_number,
            bed_type,
            state,
            price_per_day: self.price_per_day,
            amenities: serde_json::from_str(&self.amenities)?,
            last_cleaned: self.last_cleaned,
            notes: self.notes,
        })
    }
}

const BED_COLUMNS: &str = "bed_id, room, bed_number, bed_type, status, occupant, \
                           price_per_day, amenities, last_cleaned, notes";

fn map_bed_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BedRow> {
    Ok(BedRow {
        bed_id: row.get(0)?,
        room: row.get(1)?,
        bed_number: row.get(2)?,
        bed_type: row.get(3)?,
        status: row.get(4)?,
        occupant: row.get(5)?,
        price_per_day: row.get(6)?,
        amenities: row.get(7)?,
        last_cleaned: row.get(8)?,
        notes: row.get(9)?,
    })
}

impl Database {
    /// Insert or update a floor row (wards/beds are written separately).
    pub fn upsert_floor(&self, floor_id: &str, name: &str, level: i32) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO floors (floor_id, name, level)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(floor_id) DO UPDATE SET
                name = excluded.name,
                level = excluded.level,
                updated_at = datetime('now')
            "#,
            params![floor_id, name, level],
        )?;
        Ok(())
    }

    /// Insert or update a ward row.
    pub fn upsert_ward(&self, ward_id: &str, floor_id: &str, name: &str) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO wards (ward_id, floor_id, name)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(ward_id) DO UPDATE SET
                floor_id = excluded.floor_id,
                name = excluded.name,
                updated_at = datetime('now')
            "#,
            params![ward_id, floor_id, name],
        )?;
        Ok(())
    }

    /// Insert or update a bed row.
    pub fn upsert_bed(&self, ward_id: &str, bed: &Bed) -> DbResult<()> {
        let occupant = bed
            .occupant()
            .map(serde_json::to_string)
            .transpose()?;
        let amenities = serde_json::to_string(&bed.amenities)?;

        self.conn.execute(
            r#"
            INSERT INTO beds (
                bed_id, ward_id, room, bed_number, bed_type, status, occupant,
                price_per_day, amenities, last_cleaned, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            ON CONFLICT(bed_id) DO UPDATE SET
                ward_id = excluded.ward_id,
                room = excluded.room,
                bed_number = excluded.bed_number,
                bed_type = excluded.bed_type,
                status = excluded.status,
                occupant = excluded.occupant,
                price_per_day = excluded.price_per_day,
                amenities = excluded.amenities,
                last_cleaned = excluded.last_cleaned,
                notes = excluded.notes,
                updated_at = datetime('now')
            "#,
            params![
                bed.bed_id,
                ward_id,
                bed.room,
                bed.bed_number,
                bed.bed_type.code(),
                bed.status().code(),
                occupant,
                bed.price_per_day,
                amenities,
                bed.last_cleaned,
                bed.notes,
            ],
        )?;
        Ok(())
    }

    /// Get a bed by id.
    pub fn get_bed(&self, bed_id: &str) -> DbResult<Option<Bed>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {BED_COLUMNS} FROM beds WHERE bed_id = ?"),
                [bed_id],
                map_bed_row,
            )
            .optional()?;
        row.map(BedRow::into_bed).transpose()
    }

    /// List beds in a ward, ordered by bed number.
    pub fn list_beds_in_ward(&self, ward_id: &str) -> DbResult<Vec<Bed>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {BED_COLUMNS} FROM beds WHERE ward_id = ? ORDER BY bed_number"
        ))?;
        let rows = stmt.query_map([ward_id], map_bed_row)?;
        let raw: Vec<BedRow> = rows.collect::<Result<_, _>>()?;
        raw.into_iter().map(BedRow::into_bed).collect()
    }

    /// Write a whole catalog snapshot through the row-level upserts.
    pub fn save_catalog(&self, catalog: &BedCatalog) -> DbResult<()> {
        for floor in &catalog.floors {
            self.upsert_floor(&floor.floor_id, &floor.name, floor.level)?;
            for ward in &floor.wards {
                self.upsert_ward(&ward.ward_id, &floor.floor_id, &ward.name)?;
                for bed in &ward.beds {
                    self.upsert_bed(&ward.ward_id, bed)?;
                }
            }
        }
        Ok(())
    }

    /// Assemble the floor → ward → bed tree for a session snapshot.
    ///
    /// Floors sort by level, wards and beds by name/number.
    pub fn load_catalog(&self) -> DbResult<BedCatalog> {
        let mut floors: Vec<Floor> = {
            let mut stmt = self
                .conn
                .prepare("SELECT floor_id, name, level FROM floors ORDER BY level")?;
            let rows = stmt.query_map([], |row| {
                Ok(Floor {
                    floor_id: row.get(0)?,
                    name: row.get(1)?,
                    level: row.get(2)?,
                    wards: Vec::new(),
                })
            })?;
            rows.collect::<Result<_, _>>()?
        };

        for floor in &mut floors {
            let ward_rows: Vec<(String, String)> = {
                let mut stmt = self
                    .conn
                    .prepare("SELECT ward_id, name FROM wards WHERE floor_id = ? ORDER BY name")?;
                let rows = stmt.query_map([&floor.floor_id], |row| {
                    Ok((row.get(0)?, row.get(1)?))
                })?;
                rows.collect::<Result<_, _>>()?
            };

            for (ward_id, name) in ward_rows {
                let beds = self.list_beds_in_ward(&ward_id)?;
                floor.wards.push(Ward {
                    ward_id,
                    name,
                    beds,
                });
            }
        }

        Ok(BedCatalog::new(floors))
    }
}
