//! SQLite schema definition.

/// Complete database schema for wardboard.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Floors & Wards
-- ============================================================================

CREATE TABLE IF NOT EXISTS floors (
    floor_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    level INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS wards (
    ward_id TEXT PRIMARY KEY,
    floor_id TEXT NOT NULL REFERENCES floors(floor_id),
    name TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_wards_floor ON wards(floor_id);

-- ============================================================================
-- Beds
-- ============================================================================

CREATE TABLE IF NOT EXISTS beds (
    bed_id TEXT PRIMARY KEY,
    ward_id TEXT NOT NULL REFERENCES wards(ward_id),
    room TEXT NOT NULL,
    bed_number TEXT NOT NULL,
    bed_type TEXT NOT NULL CHECK (bed_type IN ('icu', 'hdu', 'ward', 'private', 'isolation')),
    status TEXT NOT NULL CHECK (status IN ('available', 'occupied', 'reserved', 'maintenance')),
    occupant TEXT,                                -- JSON Occupant (occupied beds only)
    price_per_day INTEGER NOT NULL DEFAULT 0,
    amenities TEXT NOT NULL DEFAULT '[]',         -- JSON array of strings
    last_cleaned TEXT,
    notes TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_beds_ward ON beds(ward_id);
CREATE INDEX IF NOT EXISTS idx_beds_status ON beds(status);

-- Occupied beds carry an occupant record, nothing else does
CREATE TRIGGER IF NOT EXISTS beds_check_occupant_insert BEFORE INSERT ON beds
BEGIN
    SELECT CASE
        WHEN new.status = 'occupied' AND new.occupant IS NULL THEN
            RAISE(ABORT, 'Occupied beds must have an occupant')
        WHEN new.status != 'occupied' AND new.occupant IS NOT NULL THEN
            RAISE(ABORT, 'Only occupied beds may have an occupant')
    END;
END;

CREATE TRIGGER IF NOT EXISTS beds_check_occupant_update BEFORE UPDATE ON beds
BEGIN
    SELECT CASE
        WHEN new.status = 'occupied' AND new.occupant IS NULL THEN
            RAISE(ABORT, 'Occupied beds must have an occupant')
        WHEN new.status != 'occupied' AND new.occupant IS NOT NULL THEN
            RAISE(ABORT, 'Only occupied beds may have an occupant')
    END;
END;

-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    local_id TEXT PRIMARY KEY,
    mrn TEXT NOT NULL,
    name TEXT NOT NULL,
    date_of_birth TEXT,
    current_ward TEXT,
    notes TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);
CREATE INDEX IF NOT EXISTS idx_patients_mrn ON patients(mrn);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    fn seed_ward(conn: &Connection) {
        conn.execute(
            "INSERT INTO floors (floor_id, name, level) VALUES ('F1', 'First Floor', 1)",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO wards (ward_id, floor_id, name) VALUES ('WA', 'F1', 'General Ward A')",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_occupant_trigger_requires_occupant_when_occupied() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        seed_ward(&conn);

        // Occupied without occupant should fail
        let result = conn.execute(
            "INSERT INTO beds (bed_id, ward_id, room, bed_number, bed_type, status)
             VALUES ('B1', 'WA', '101', '101-1', 'ward', 'occupied')",
            [],
        );
        assert!(result.is_err());

        // Available with occupant should fail
        let result = conn.execute(
            "INSERT INTO beds (bed_id, ward_id, room, bed_number, bed_type, status, occupant)
             VALUES ('B1', 'WA', '101', '101-1', 'ward', 'available', '{}')",
            [],
        );
        assert!(result.is_err());

        // Valid rows succeed
        let result = conn.execute(
            "INSERT INTO beds (bed_id, ward_id, room, bed_number, bed_type, status, occupant)
             VALUES ('B1', 'WA', '101', '101-1', 'ward', 'occupied', '{\"name\":\"X\"}')",
            [],
        );
        assert!(result.is_ok());

        let result = conn.execute(
            "INSERT INTO beds (bed_id, ward_id, room, bed_number, bed_type, status)
             VALUES ('B2', 'WA', '101', '101-2', 'ward', 'available')",
            [],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_status_check_rejects_unknown_codes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();
        seed_ward(&conn);

        let result = conn.execute(
            "INSERT INTO beds (bed_id, ward_id, room, bed_number, bed_type, status)
             VALUES ('B1', 'WA', '101', '101-1', 'ward', 'broken')",
            [],
        );
        assert!(result.is_err());
    }
}
