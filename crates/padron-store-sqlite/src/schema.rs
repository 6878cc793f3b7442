//! SQL schema for the Padrón SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

-- Rows are never deleted; `eliminado = 1` marks a logical deletion.
CREATE TABLE IF NOT EXISTS empresa (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    eliminado           INTEGER NOT NULL DEFAULT 0,
    razon_social        TEXT    NOT NULL,
    cuit                TEXT    NOT NULL,
    actividad_principal TEXT,
    email               TEXT
);

CREATE TABLE IF NOT EXISTS domicilio_fiscal (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    eliminado     INTEGER NOT NULL DEFAULT 0,
    calle         TEXT    NOT NULL,
    numero        INTEGER NOT NULL,
    ciudad        TEXT    NOT NULL,
    provincia     TEXT    NOT NULL,
    codigo_postal TEXT,
    pais          TEXT    NOT NULL,
    empresa_id    INTEGER REFERENCES empresa(id)   -- set only when linking
);

CREATE INDEX IF NOT EXISTS empresa_cuit_idx         ON empresa(cuit);
CREATE INDEX IF NOT EXISTS empresa_razon_social_idx ON empresa(razon_social);

-- At most one live address per empresa.
CREATE UNIQUE INDEX IF NOT EXISTS domicilio_fiscal_empresa_idx
    ON domicilio_fiscal(empresa_id)
    WHERE eliminado = 0 AND empresa_id IS NOT NULL;

PRAGMA user_version = 1;
";
