//! Serial VTK XML writers for geometry (`.vtp`) and grid (`.vti`) files.
//!
//! Data arrays are written in ascii mode. The ImageData writer emits a fixed
//! z spacing of 0.1 so the flat grid remains visible in 3D viewers.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mint::Vector3;
use tracing::info;

use crate::error::Result;
use crate::field::{ScalarField, UniformGrid, VectorField};
use crate::geom::{BoundaryLoop, BoundaryTopology};
use crate::io::{GeometrySink, GridSink};

const VTI_SPACING_Z: f64 = 0.1;

/// Writes VTK XML PolyData to the underlying writer.
pub struct XmlPolyDataWriter<W> {
    out: W,
}

impl<W: Write> XmlPolyDataWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the writer and returns the underlying output.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GeometrySink for XmlPolyDataWriter<W> {
    fn write_geometry(
        &mut self,
        points: &[Vector3<f64>],
        connectivity: &[usize],
        topology: BoundaryTopology,
    ) -> Result<()> {
        let (n_lines, n_polys) = match topology {
            BoundaryTopology::Polygon => (0, 1),
            BoundaryTopology::Polyline => (1, 0),
        };

        writeln!(self.out, "<?xml version=\"1.0\"?>")?;
        writeln!(
            self.out,
            "<VTKFile type=\"PolyData\" version=\"0.1\" byte_order=\"LittleEndian\">"
        )?;
        writeln!(self.out, "  <PolyData>")?;
        writeln!(
            self.out,
            "    <Piece NumberOfPoints=\"{}\" NumberOfVerts=\"0\" NumberOfLines=\"{}\" NumberOfStrips=\"0\" NumberOfPolys=\"{}\">",
            points.len(),
            n_lines,
            n_polys
        )?;

        writeln!(self.out, "      <Points>")?;
        writeln!(
            self.out,
            "        <DataArray type=\"Float64\" NumberOfComponents=\"3\" format=\"ascii\">"
        )?;
        for p in points {
            writeln!(self.out, "          {} {} {}", p.x, p.y, p.z)?;
        }
        writeln!(self.out, "        </DataArray>")?;
        writeln!(self.out, "      </Points>")?;

        let section = match topology {
            BoundaryTopology::Polygon => "Polys",
            BoundaryTopology::Polyline => "Lines",
        };
        writeln!(self.out, "      <{section}>")?;
        writeln!(
            self.out,
            "        <DataArray type=\"Int64\" Name=\"connectivity\" format=\"ascii\">"
        )?;
        write!(self.out, "         ")?;
        for id in connectivity {
            write!(self.out, " {id}")?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "        </DataArray>")?;
        writeln!(
            self.out,
            "        <DataArray type=\"Int64\" Name=\"offsets\" format=\"ascii\">"
        )?;
        writeln!(self.out, "          {}", connectivity.len())?;
        writeln!(self.out, "        </DataArray>")?;
        writeln!(self.out, "      </{section}>")?;

        writeln!(self.out, "    </Piece>")?;
        writeln!(self.out, "  </PolyData>")?;
        writeln!(self.out, "</VTKFile>")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes VTK XML ImageData with cell-data arrays to the underlying writer.
pub struct XmlImageDataWriter<W> {
    out: W,
}

impl<W: Write> XmlImageDataWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the writer and returns the underlying output.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GridSink for XmlImageDataWriter<W> {
    fn write_cell_data(
        &mut self,
        grid: &UniformGrid,
        scalars: &[&ScalarField],
        vectors: &[&VectorField],
    ) -> Result<()> {
        let extent = format!("0 {} 0 {} 0 0", grid.nx, grid.ny);

        writeln!(self.out, "<?xml version=\"1.0\"?>")?;
        writeln!(
            self.out,
            "<VTKFile type=\"ImageData\" version=\"0.1\" byte_order=\"LittleEndian\">"
        )?;
        writeln!(
            self.out,
            "  <ImageData WholeExtent=\"{}\" Origin=\"{} {} 0\" Spacing=\"{} {} {}\">",
            extent, grid.origin.x, grid.origin.y, grid.spacing.x, grid.spacing.y, VTI_SPACING_Z
        )?;
        writeln!(self.out, "    <Piece Extent=\"{extent}\">")?;
        writeln!(self.out, "      <CellData>")?;

        for field in scalars {
            writeln!(
                self.out,
                "        <DataArray type=\"Float64\" Name=\"{}\" format=\"ascii\">",
                field.name
            )?;
            for j in 0..grid.ny {
                write!(self.out, "         ")?;
                for i in 0..grid.nx {
                    write!(self.out, " {}", field.data[grid.cell_id(i, j)])?;
                }
                writeln!(self.out)?;
            }
            writeln!(self.out, "        </DataArray>")?;
        }

        for field in vectors {
            writeln!(
                self.out,
                "        <DataArray type=\"Float64\" Name=\"{}\" NumberOfComponents=\"3\" format=\"ascii\">",
                field.name
            )?;
            for j in 0..grid.ny {
                write!(self.out, "         ")?;
                for i in 0..grid.nx {
                    let v = field.data[grid.cell_id(i, j)];
                    write!(self.out, " {} {} {}", v.x, v.y, v.z)?;
                }
                writeln!(self.out)?;
            }
            writeln!(self.out, "        </DataArray>")?;
        }

        writeln!(self.out, "      </CellData>")?;
        writeln!(self.out, "    </Piece>")?;
        writeln!(self.out, "  </ImageData>")?;
        writeln!(self.out, "</VTKFile>")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes a boundary loop to `path` as a `.vtp` file.
pub fn write_vtp(path: impl AsRef<Path>, boundary: &BoundaryLoop) -> Result<()> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    let mut writer = XmlPolyDataWriter::new(file);
    writer.write_geometry(
        &boundary.interop_points(),
        &boundary.connectivity(),
        boundary.topology,
    )?;
    info!("Wrote boundary geometry to '{}'.", path.display());
    Ok(())
}

/// Writes a grid and its cell-data fields to `path` as a `.vti` file.
pub fn write_vti(
    path: impl AsRef<Path>,
    grid: &UniformGrid,
    scalars: &[&ScalarField],
    vectors: &[&VectorField],
) -> Result<()> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    let mut writer = XmlImageDataWriter::new(file);
    writer.write_cell_data(grid, scalars, vectors)?;
    info!("Wrote grid data to '{}'.", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::field::coverage::bake_coverage;
    use crate::geom::Circle;

    fn small_loop(topology: BoundaryTopology) -> BoundaryLoop {
        let circle = Circle::new(DVec2::new(0.5, 0.5), 0.3);
        BoundaryLoop::around_circle(&circle, 4, topology)
    }

    fn render_loop(topology: BoundaryTopology) -> String {
        let boundary = small_loop(topology);
        let mut writer = XmlPolyDataWriter::new(Vec::new());
        writer
            .write_geometry(
                &boundary.interop_points(),
                &boundary.connectivity(),
                boundary.topology,
            )
            .unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn polydata_polygon_counts_a_single_poly_cell() {
        let xml = render_loop(BoundaryTopology::Polygon);
        assert!(xml.contains("NumberOfPoints=\"4\""));
        assert!(xml.contains("NumberOfPolys=\"1\""));
        assert!(xml.contains("NumberOfLines=\"0\""));
        assert!(xml.contains("<Polys>"));
        assert!(xml.contains("Name=\"connectivity\""));
    }

    #[test]
    fn polydata_polyline_closes_under_lines() {
        let xml = render_loop(BoundaryTopology::Polyline);
        assert!(xml.contains("NumberOfLines=\"1\""));
        assert!(xml.contains("NumberOfPolys=\"0\""));
        assert!(xml.contains("<Lines>"));
        // 4 vertices plus the closing index.
        assert!(xml.contains("          5"));
    }

    #[test]
    fn imagedata_carries_named_cell_arrays() {
        let grid = UniformGrid::unit_square(4);
        let circle = Circle::new(DVec2::new(0.5, 0.5), 0.3);
        let coverage = bake_coverage(&circle, &grid, 4);
        let normals = VectorField::zeroed(grid.clone(), "NormalVector");

        let mut writer = XmlImageDataWriter::new(Vec::new());
        writer
            .write_cell_data(&grid, &[&coverage], &[&normals])
            .unwrap();
        let xml = String::from_utf8(writer.into_inner()).unwrap();

        assert!(xml.contains("WholeExtent=\"0 4 0 4 0 0\""));
        assert!(xml.contains("Spacing=\"0.25 0.25 0.1\""));
        assert!(xml.contains("Name=\"InsideCircleCoverage\""));
        assert!(xml.contains("Name=\"NormalVector\" NumberOfComponents=\"3\""));
    }

    #[test]
    fn imagedata_emits_one_value_per_cell() {
        let grid = UniformGrid::unit_square(3);
        let mut field = ScalarField::zeroed(grid.clone(), "values");
        for (id, v) in field.data.iter_mut().enumerate() {
            *v = id as f64;
        }

        let mut writer = XmlImageDataWriter::new(Vec::new());
        writer.write_cell_data(&grid, &[&field], &[]).unwrap();
        let xml = String::from_utf8(writer.into_inner()).unwrap();

        let body = xml
            .split("format=\"ascii\">")
            .nth(1)
            .and_then(|s| s.split("</DataArray>").next())
            .unwrap();
        let values: Vec<&str> = body.split_whitespace().collect();
        assert_eq!(values.len(), 9);
        assert_eq!(values[0], "0");
        assert_eq!(values[8], "8");
    }
}
