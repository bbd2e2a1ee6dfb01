//! JSON interchange format written by external decoder tools.
//!
//! The layout follows CfRadial naming so a dump can be produced straight from
//! a reference reader. `null` cells mark gates without data.

use crate::prelude::{DecodeResult, VolumeError, VolumeResult};
use crate::volume::radar::{FieldData, RadarVolume, VolumeParts};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDump {
    pub name: String,
    pub data: Vec<Vec<Option<f32>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_value: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeDump {
    pub time_units: String,
    pub latitude: Vec<f64>,
    pub longitude: Vec<f64>,
    pub altitude: Vec<f64>,
    pub fixed_angle: Vec<f32>,
    pub sweep_start_ray_index: Vec<usize>,
    pub sweep_end_ray_index: Vec<usize>,
    pub azimuth: Vec<f32>,
    pub range: Vec<f32>,
    pub fields: Vec<FieldDump>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_parameters: Option<BTreeMap<String, Vec<Option<f32>>>>,
}

impl VolumeDump {
    pub fn from_slice(bytes: &[u8]) -> DecodeResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn into_volume(self) -> VolumeResult<RadarVolume> {
        let gates = self.range.len();
        let fields = self
            .fields
            .into_iter()
            .map(|field| field_from_dump(field, gates))
            .collect::<VolumeResult<Vec<_>>>()?;

        let instrument_parameters = self.instrument_parameters.map(|params| {
            params
                .into_iter()
                .map(|(name, values)| {
                    let values = values
                        .into_iter()
                        .map(|value| value.unwrap_or(f32::NAN))
                        .collect();
                    (name, values)
                })
                .collect()
        });

        RadarVolume::new(VolumeParts {
            time_units: self.time_units,
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
            fixed_angle: self.fixed_angle,
            sweep_start_ray_index: self.sweep_start_ray_index,
            sweep_end_ray_index: self.sweep_end_ray_index,
            azimuth: self.azimuth,
            range: self.range,
            fields,
            instrument_parameters,
        })
    }
}

fn field_from_dump(field: FieldDump, gates: usize) -> VolumeResult<(String, FieldData)> {
    let rays = field.data.len();
    let mut values = Vec::with_capacity(rays * gates);
    let mut mask = Vec::with_capacity(rays * gates);
    for (ray, row) in field.data.iter().enumerate() {
        if row.len() != gates {
            return Err(VolumeError::FieldShape {
                field: field.name.clone(),
                reason: format!("ray {} has {} gates, expected {}", ray, row.len(), gates),
            });
        }
        for cell in row {
            values.push(cell.unwrap_or(f32::NAN));
            mask.push(cell.is_none());
        }
    }

    let shape_error = |err: ndarray::ShapeError| VolumeError::FieldShape {
        field: field.name.clone(),
        reason: err.to_string(),
    };
    let values = Array2::from_shape_vec((rays, gates), values).map_err(shape_error)?;
    let mask = Array2::from_shape_vec((rays, gates), mask).map_err(shape_error)?;

    let mut data = FieldData::new(values).with_mask(mask);
    if let Some(fill_value) = field.fill_value {
        data = data.with_fill_value(fill_value);
    }
    Ok((field.name, data))
}
