//! Database schema definitions and SQL constants.
//!
//! Dates are stored as `YYYY-MM-DD` text so that string comparison orders
//! them chronologically.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the facilities table.
pub const CREATE_FACILITIES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS facilities (
        code TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL
    )";

/// SQL statement to create the invoices table.
pub const CREATE_INVOICES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS invoices (
        id INTEGER PRIMARY KEY NOT NULL,
        contact_id INTEGER NOT NULL,
        contact_email_address TEXT NOT NULL
    )";

/// SQL statement to create the stays table.
///
/// One row per booked night.
pub const CREATE_STAYS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS stays (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        invoice_id INTEGER NOT NULL REFERENCES invoices(id),
        facility_code TEXT NOT NULL REFERENCES facilities(code),
        stay_date TEXT NOT NULL,
        no_users INTEGER NOT NULL
    )";

/// SQL statement to create the lock combinations table.
pub const CREATE_LOCK_COMBINATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS lock_combinations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        facility_code TEXT NOT NULL REFERENCES facilities(code),
        combination TEXT NOT NULL,
        valid_from TEXT NOT NULL,
        valid_until TEXT NOT NULL
    )";

/// SQL statement to index stays by invoice.
pub const CREATE_STAYS_INVOICE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_stays_invoice ON stays(invoice_id)";

/// SQL statement to index stays by date.
pub const CREATE_STAYS_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_stays_date ON stays(stay_date)";

/// SQL statement to index lock combinations by facility.
pub const CREATE_LOCK_COMBINATIONS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_lock_combinations_facility ON lock_combinations(facility_code)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// Invoices whose earliest booked night is `?1`.
pub const SELECT_INVOICES_WITH_STAYS_BEGINNING: &str = r"
    SELECT i.id AS invoice_id, i.contact_id, i.contact_email_address
    FROM invoices i
    JOIN (
        SELECT invoice_id, MIN(stay_date) AS first_night
        FROM stays
        GROUP BY invoice_id
    ) s ON s.invoice_id = i.id
    WHERE s.first_night = ?1
    ORDER BY i.id
";

/// Invoices whose latest booked night is `?1`.
pub const SELECT_INVOICES_WITH_STAYS_ENDING: &str = r"
    SELECT i.id AS invoice_id, i.contact_id, i.contact_email_address
    FROM invoices i
    JOIN (
        SELECT invoice_id, MAX(stay_date) AS last_night
        FROM stays
        GROUP BY invoice_id
    ) s ON s.invoice_id = i.id
    WHERE s.last_night = ?1
    ORDER BY i.id
";

/// The nights billed to invoice `?1`, in insertion order.
pub const SELECT_ITINERARY_FOR_INVOICE: &str = r"
    SELECT f.code AS facility_code, f.name AS facility_name, s.stay_date, s.no_users
    FROM stays s
    JOIN facilities f ON f.code = s.facility_code
    WHERE s.invoice_id = ?1
    ORDER BY s.id
";

/// Lock combinations for facility `?1` valid on date `?2`.
pub const SELECT_LOCK_COMBINATIONS_FOR_STAY: &str = r"
    SELECT combination, valid_from, valid_until
    FROM lock_combinations
    WHERE facility_code = ?1 AND valid_from <= ?2 AND valid_until >= ?2
    ORDER BY valid_from, id
";

/// SQL statement to insert or replace a facility.
pub const INSERT_FACILITY: &str =
    "INSERT OR REPLACE INTO facilities (code, name) VALUES (?1, ?2)";

/// SQL statement to insert or replace an invoice.
pub const INSERT_INVOICE: &str = r"
    INSERT OR REPLACE INTO invoices (id, contact_id, contact_email_address)
    VALUES (?1, ?2, ?3)
";

/// SQL statement to insert one booked night.
pub const INSERT_STAY: &str = r"
    INSERT INTO stays (invoice_id, facility_code, stay_date, no_users)
    VALUES (?1, ?2, ?3, ?4)
";

/// SQL statement to insert a lock combination.
pub const INSERT_LOCK_COMBINATION: &str = r"
    INSERT INTO lock_combinations (facility_code, combination, valid_from, valid_until)
    VALUES (?1, ?2, ?3, ?4)
";
