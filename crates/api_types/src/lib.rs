use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

pub use money::{Money, Percentage};

mod money;

/// Errors raised while decoding wire values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WireError {
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),
    #[error("unknown wire value: {0:?}")]
    UnknownValue(String),
}

/// Record status used by the financial resources (quotations, consultations,
/// sales). Soft deletion is a transition to `Eliminado`; rows are never
/// physically removed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Status {
    #[default]
    #[serde(rename = "pendiente")]
    Pendiente,
    #[serde(rename = "completada")]
    Completada,
    #[serde(rename = "eliminado")]
    Eliminado,
}

impl Status {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Completada => "completada",
            Self::Eliminado => "eliminado",
        }
    }
}

impl TryFrom<&str> for Status {
    type Error = WireError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        match raw {
            "pendiente" => Ok(Self::Pendiente),
            "completada" => Ok(Self::Completada),
            "eliminado" => Ok(Self::Eliminado),
            other => Err(WireError::UnknownValue(other.to_string())),
        }
    }
}

/// Body of the status PATCH used for soft deletion and completion of the
/// financial resources.
#[derive(Debug, Serialize)]
pub struct CambioEstado {
    pub estado: Status,
}

/// Settlement channel of a payment, sale or cash movement.
///
/// `Mixto` splits one amount between cash and QR; its two parts are carried
/// in the `monto_efectivo` / `monto_qr` companion fields and must sum to the
/// total exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Efectivo")]
    Efectivo,
    #[serde(rename = "QR")]
    Qr,
    #[serde(rename = "Mixto")]
    Mixto,
}

impl PaymentMethod {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Efectivo => "Efectivo",
            Self::Qr => "QR",
            Self::Mixto => "Mixto",
        }
    }
}

impl TryFrom<&str> for PaymentMethod {
    type Error = WireError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        match raw {
            "Efectivo" => Ok(Self::Efectivo),
            "QR" => Ok(Self::Qr),
            "Mixto" => Ok(Self::Mixto),
            other => Err(WireError::UnknownValue(other.to_string())),
        }
    }
}

/// Back-office user role. `Deserialize` is derived because the role is part
/// of the persisted session profile; wire ingress still goes through
/// [`TryFrom`] so unknown values can be coerced instead of failing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[default]
    #[serde(rename = "asistente")]
    Asistente,
}

impl Role {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Asistente => "asistente",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = WireError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        match raw {
            "admin" => Ok(Self::Admin),
            "asistente" => Ok(Self::Asistente),
            other => Err(WireError::UnknownValue(other.to_string())),
        }
    }
}

/// How a doctor is compensated. Commission splits only apply to `Comision`
/// doctors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum DoctorPayKind {
    #[serde(rename = "Comision")]
    Comision,
    #[default]
    #[serde(rename = "Sueldo")]
    Sueldo,
}

impl DoctorPayKind {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Comision => "Comision",
            Self::Sueldo => "Sueldo",
        }
    }
}

impl TryFrom<&str> for DoctorPayKind {
    type Error = WireError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        match raw {
            "Comision" => Ok(Self::Comision),
            "Sueldo" => Ok(Self::Sueldo),
            other => Err(WireError::UnknownValue(other.to_string())),
        }
    }
}

/// Catalog status, integer-coded on the wire (`1` active, `0` inactive).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProductStatus {
    Activo,
    #[default]
    Inactivo,
}

impl ProductStatus {
    pub fn code(self) -> i64 {
        match self {
            Self::Activo => 1,
            Self::Inactivo => 0,
        }
    }
}

impl TryFrom<i64> for ProductStatus {
    type Error = WireError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(Self::Activo),
            0 => Ok(Self::Inactivo),
            other => Err(WireError::UnknownValue(other.to_string())),
        }
    }
}

impl Serialize for ProductStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

/// Direction of a cash-box movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum MovementKind {
    #[serde(rename = "Ingreso")]
    Ingreso,
    #[default]
    #[serde(rename = "Egreso")]
    Egreso,
}

impl MovementKind {
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Ingreso => "Ingreso",
            Self::Egreso => "Egreso",
        }
    }
}

impl TryFrom<&str> for MovementKind {
    type Error = WireError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        match raw {
            "Ingreso" => Ok(Self::Ingreso),
            "Egreso" => Ok(Self::Egreso),
            other => Err(WireError::UnknownValue(other.to_string())),
        }
    }
}

pub mod auth {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LoginRequest {
        pub username: String,
        pub password: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct LoginResponse {
        pub token: String,
        pub usuario: user::UsuarioRow,
    }
}

pub mod user {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    pub struct UsuarioRow {
        pub id: i64,
        pub username: String,
        /// `admin` | `asistente`; unknown values are coerced to `asistente`.
        pub rol: String,
    }

    #[derive(Debug, Serialize)]
    pub struct UsuarioNuevo {
        pub username: String,
        pub password: String,
        pub rol: Role,
    }

    #[derive(Debug, Serialize)]
    pub struct UsuarioActualizar {
        pub username: Option<String>,
        pub password: Option<String>,
        pub rol: Option<Role>,
    }
}

pub mod specialty {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    pub struct EspecialidadRow {
        pub id: i64,
        pub nombre: String,
    }

    #[derive(Debug, Serialize)]
    pub struct EspecialidadNueva {
        pub nombre: String,
    }
}

pub mod doctor {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    pub struct DoctorRow {
        pub id: i64,
        pub nombre: String,
        pub telefono: Option<String>,
        /// `Comision` | `Sueldo`; unknown values are coerced to `Sueldo`.
        pub tipo_pago: String,
    }

    #[derive(Debug, Serialize)]
    pub struct DoctorNuevo {
        pub nombre: String,
        pub telefono: Option<String>,
        pub tipo_pago: DoctorPayKind,
        /// Specialty ids to assign.
        pub especialidades: Vec<i64>,
    }

    /// One commission row as returned by the per-doctor commissions endpoint:
    /// the service context plus the owed/pending amounts.
    #[derive(Debug, Clone, Deserialize)]
    pub struct DoctorComisionRow {
        pub cotizacion_id: i64,
        pub servicio_id: i64,
        pub porcentaje: Percentage,
        pub monto: Money,
        pub monto_pendiente: Money,
    }
}

pub mod service {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ServicioRow {
        pub id: i64,
        pub nombre: String,
        pub especialidad_id: i64,
        pub precio: Money,
    }

    #[derive(Debug, Serialize)]
    pub struct ServicioNuevo {
        pub nombre: String,
        pub especialidad_id: i64,
        pub precio: Money,
    }
}

pub mod product {
    use super::*;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductoRow {
        pub id: i64,
        pub codigo: String,
        pub nombre: String,
        pub precio_venta: Money,
        pub precio_costo: Money,
        pub stock: i64,
        /// Integer-coded status; unknown codes are coerced to inactive.
        pub estado: i64,
    }

    #[derive(Debug, Serialize)]
    pub struct ProductoNuevo {
        pub codigo: String,
        pub nombre: String,
        pub precio_venta: Money,
        pub precio_costo: Money,
        pub stock: i64,
        pub estado: ProductStatus,
    }
}

pub mod quotation {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    #[derive(Debug, Clone, Deserialize)]
    pub struct CotizacionRow {
        pub id: i64,
        pub fecha: NaiveDate,
        pub nombre_cliente: String,
        pub telefono: Option<String>,
        /// `pendiente` | `completada` | `eliminado`.
        pub estado: String,
        pub total: Money,
        pub monto_pendiente: Money,
        pub usuario_id: i64,
    }

    /// One quoted service line. `comisiones` is usually absent from the list
    /// endpoint and filled by the per-service commissions fetch.
    #[derive(Debug, Clone, Deserialize)]
    pub struct CotizacionServicioRow {
        pub id: i64,
        pub servicio_id: i64,
        pub especialidad_id: i64,
        pub precio: Money,
        #[serde(default)]
        pub comisiones: Vec<ComisionRow>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ComisionRow {
        pub doctor_id: i64,
        pub porcentaje: Percentage,
        pub monto: Money,
        pub monto_pendiente: Money,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct PagoRow {
        pub id: i64,
        pub fecha: NaiveDateTime,
        pub monto: Money,
        /// `Efectivo` | `QR` | `Mixto`.
        pub metodo_pago: String,
        pub monto_efectivo: Option<Money>,
        pub monto_qr: Option<Money>,
        /// Commission amounts settled by this payment, keyed by doctor.
        #[serde(default)]
        pub comisiones: Vec<PagoComisionRow>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct PagoComisionRow {
        pub doctor_id: i64,
        pub monto: Money,
    }

    #[derive(Debug, Serialize)]
    pub struct CotizacionNueva {
        pub fecha: NaiveDate,
        pub nombre_cliente: String,
        pub telefono: Option<String>,
        pub servicios: Vec<CotizacionServicioNuevo>,
    }

    #[derive(Debug, Serialize)]
    pub struct CotizacionServicioNuevo {
        pub servicio_id: i64,
        pub especialidad_id: i64,
        pub precio: Money,
        pub comisiones: Vec<ComisionNueva>,
    }

    #[derive(Debug, Serialize)]
    pub struct ComisionNueva {
        pub doctor_id: i64,
        pub porcentaje: Percentage,
    }

    #[derive(Debug, Serialize)]
    pub struct CotizacionActualizar {
        pub nombre_cliente: Option<String>,
        pub telefono: Option<String>,
    }

    #[derive(Debug, Serialize)]
    pub struct PagoNuevo {
        pub monto: Money,
        pub metodo_pago: PaymentMethod,
        pub monto_efectivo: Option<Money>,
        pub monto_qr: Option<Money>,
        pub comisiones: Vec<PagoComisionNueva>,
    }

    #[derive(Debug, Serialize)]
    pub struct PagoComisionNueva {
        pub doctor_id: i64,
        pub monto: Money,
    }

}

pub mod consultation {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ConsultaRow {
        pub id: i64,
        pub fecha: NaiveDate,
        pub nombre_paciente: String,
        pub doctor_id: i64,
        /// `pendiente` | `completada` | `eliminado`.
        pub estado: String,
        pub total: Money,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ConsultaDetalleRow {
        pub id: i64,
        pub servicio_id: i64,
        pub precio: Money,
        pub nota: Option<String>,
    }

    #[derive(Debug, Serialize)]
    pub struct ConsultaNueva {
        pub fecha: NaiveDate,
        pub nombre_paciente: String,
        pub doctor_id: i64,
        pub detalles: Vec<ConsultaDetalleNueva>,
    }

    #[derive(Debug, Serialize)]
    pub struct ConsultaDetalleNueva {
        pub servicio_id: i64,
        pub precio: Money,
        pub nota: Option<String>,
    }
}

pub mod sale {
    use super::*;
    use chrono::NaiveDateTime;

    #[derive(Debug, Clone, Deserialize)]
    pub struct VentaRow {
        pub id: i64,
        pub fecha: NaiveDateTime,
        pub usuario_id: i64,
        pub total: Money,
        /// `Efectivo` | `QR` | `Mixto`.
        pub metodo_pago: String,
        pub monto_efectivo: Option<Money>,
        pub monto_qr: Option<Money>,
        /// `pendiente` | `completada` | `eliminado`.
        pub estado: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct VentaDetalleRow {
        pub id: i64,
        pub producto_id: i64,
        pub cantidad: i64,
        pub precio: Money,
    }

    #[derive(Debug, Serialize)]
    pub struct VentaNueva {
        pub metodo_pago: PaymentMethod,
        pub monto_efectivo: Option<Money>,
        pub monto_qr: Option<Money>,
        pub total: Money,
        pub detalles: Vec<VentaDetalleNueva>,
    }

    #[derive(Debug, Serialize)]
    pub struct VentaDetalleNueva {
        pub producto_id: i64,
        pub cantidad: i64,
        pub precio: Money,
    }
}

pub mod cash {
    use super::*;
    use chrono::NaiveDateTime;

    #[derive(Debug, Clone, Deserialize)]
    pub struct CajaRow {
        pub id: i64,
        pub fecha_apertura: NaiveDateTime,
        /// `None` while the box is open.
        pub fecha_cierre: Option<NaiveDateTime>,
        pub monto_apertura: Money,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct MovimientoRow {
        pub id: i64,
        pub fecha: NaiveDateTime,
        /// `Ingreso` | `Egreso`.
        pub tipo: String,
        pub concepto: String,
        pub monto: Money,
        /// `Efectivo` | `QR` | `Mixto`.
        pub metodo_pago: String,
        pub monto_efectivo: Option<Money>,
        pub monto_qr: Option<Money>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct GastoRow {
        pub id: i64,
        pub fecha: NaiveDateTime,
        pub concepto: String,
        pub monto: Money,
    }

    #[derive(Debug, Serialize)]
    pub struct CajaAbrir {
        pub monto_apertura: Money,
    }

    #[derive(Debug, Serialize)]
    pub struct MovimientoNuevo {
        pub tipo: MovementKind,
        pub concepto: String,
        pub monto: Money,
        pub metodo_pago: PaymentMethod,
        pub monto_efectivo: Option<Money>,
        pub monto_qr: Option<Money>,
    }

    #[derive(Debug, Serialize)]
    pub struct GastoNuevo {
        pub concepto: String,
        pub monto: Money,
    }
}

pub mod report {
    use super::*;
    use chrono::NaiveDate;

    /// Date-range totals as computed by the backend. All fields are decimal
    /// strings on the wire.
    #[derive(Debug, Clone, Deserialize)]
    pub struct ResumenRow {
        pub desde: NaiveDate,
        pub hasta: NaiveDate,
        pub total_ventas: Money,
        pub total_consultas: Money,
        pub total_pagos_cotizaciones: Money,
        pub total_gastos: Money,
        pub neto: Money,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_round_trip() {
        for status in [Status::Pendiente, Status::Completada, Status::Eliminado] {
            assert_eq!(Status::try_from(status.as_wire()), Ok(status));
        }
        assert!(Status::try_from("anulada").is_err());
    }

    #[test]
    fn payment_method_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Qr).unwrap(),
            "\"QR\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Mixto).unwrap(),
            "\"Mixto\""
        );
    }

    #[test]
    fn product_status_is_integer_coded() {
        assert_eq!(serde_json::to_string(&ProductStatus::Activo).unwrap(), "1");
        assert_eq!(ProductStatus::try_from(0), Ok(ProductStatus::Inactivo));
        assert!(ProductStatus::try_from(7).is_err());
    }

    #[test]
    fn quotation_row_parses_string_decimals() {
        let row: quotation::CotizacionRow = serde_json::from_str(
            r#"{
                "id": 12,
                "fecha": "2026-03-02",
                "nombre_cliente": "Ana Rojas",
                "telefono": null,
                "estado": "pendiente",
                "total": "350.00",
                "monto_pendiente": "120.50",
                "usuario_id": 3
            }"#,
        )
        .unwrap();
        assert_eq!(row.total.cents(), 35_000);
        assert_eq!(row.monto_pendiente.cents(), 12_050);
    }
}
