//! The layered tile world: loading, animation stepping, world-space
//! collision queries, item collection and viewport-culled rendering.

use std::path::Path;

use anyhow::Context;
use macroquad::prelude::{vec2, Rect, Vec2, GREEN, RED};

use crate::camera::CameraView;
use crate::diag::{default_sink, DiagLevel, DiagSink};
use crate::error::MapError;
use crate::gid::Gid;
use crate::item::Item;
use crate::layer::MapLayer;
use crate::loader::json_loader::{prop_bool, read_map_file, RawMap};
use crate::render::Render2d;
use crate::tileset::TilesetCatalog;

/// Inclusive-end AABB overlap over pixel spans `[x, x + w - 1]`, the same
/// convention the tile-range computation uses. Boxes that merely share an
/// edge do not overlap.
#[inline]
fn boxes_overlap(
    ax: f32,
    ay: f32,
    aw: f32,
    ah: f32,
    bx: f32,
    by: f32,
    bw: f32,
    bh: f32,
) -> bool {
    ax <= bx + bw - 1.0 && ax + aw - 1.0 >= bx && ay <= by + bh - 1.0 && ay + ah - 1.0 >= by
}

/// A 2D grid world: one tileset catalog, an ordered stack of tile layers
/// and the collectible items placed by the map.
///
/// Constructed only through [`TileWorld::load`]; a failed load leaves no
/// partially usable world behind. Layers and tile data are immutable
/// afterwards, only animation timers and item flags mutate during play.
pub struct TileWorld {
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
    first_gid: u32,
    layers: Vec<MapLayer>,
    catalog: TilesetCatalog,
    items: Vec<Item>,
    debug_rendering: bool,
    on_collect: Option<Box<dyn FnMut(u32)>>,
    diag: DiagSink,
}

impl TileWorld {
    /// Load the tileset first (geometry and texture must be available for
    /// item construction), then the map: dimensions, layers and the
    /// pickup-object pass. Any missing file, undecodable image or
    /// structurally invalid layer aborts the whole load.
    pub fn load<R: Render2d>(
        map_path: &Path,
        tileset_path: &Path,
        renderer: &mut R,
    ) -> anyhow::Result<Self> {
        let catalog = TilesetCatalog::load(tileset_path, renderer)
            .with_context(|| format!("Loading tileset {}", tileset_path.display()))?;
        // The tileset path is explicit; the map dir is only needed when
        // resolving `tilesets[].source`, which this loader does not do.
        let (raw, _) = read_map_file(map_path)
            .with_context(|| format!("Loading map {}", map_path.display()))?;
        let world = Self::from_raw(raw, catalog)?;
        (world.diag)(
            DiagLevel::Info,
            &format!(
                "loaded {}x{} map: {} layers, {} items",
                world.width,
                world.height,
                world.layers.len(),
                world.items.len()
            ),
        );
        Ok(world)
    }

    pub(crate) fn from_raw(raw: RawMap, catalog: TilesetCatalog) -> Result<Self, MapError> {
        if raw.width == 0 || raw.height == 0 || raw.tilewidth == 0 || raw.tileheight == 0 {
            return Err(MapError::InvalidMap(
                "map dimensions and tile size must be positive".to_owned(),
            ));
        }

        let diag = default_sink();
        let first_gid = raw.tilesets.first().map(|t| t.firstgid).unwrap_or(1);
        let max_gid = first_gid + catalog.tilecount() - 1;

        let mut layers = Vec::new();
        let mut items = Vec::new();

        for layer in raw.layers {
            match layer.kind.as_deref().unwrap_or("tilelayer") {
                "tilelayer" => {
                    if layer.data.len() != (raw.width * raw.height) as usize {
                        return Err(MapError::InvalidLayerSize { layer: layer.name });
                    }
                    for &raw_gid in &layer.data {
                        let clean = Gid(raw_gid).clean();
                        if clean != 0 && clean > max_gid {
                            return Err(MapError::InvalidTileGid {
                                layer: layer.name.clone(),
                                gid: clean,
                                max_gid,
                            });
                        }
                    }
                    layers.push(MapLayer {
                        name: layer.name,
                        data: layer.data.into_iter().map(Gid).collect(),
                        visible: layer.visible,
                        collision: prop_bool(&layer.properties, "collision").unwrap_or(true),
                    });
                }
                "objectgroup" => {
                    let tile_w = catalog.info().tile_width as f32;
                    let tile_h = catalog.info().tile_height as f32;
                    for obj in &layer.objects {
                        let gid = match obj.gid {
                            Some(g) => Gid(g),
                            None => {
                                diag(
                                    DiagLevel::Warn,
                                    &format!(
                                        "object '{}' in layer '{}' has no gid, skipped",
                                        obj.name, layer.name
                                    ),
                                );
                                continue;
                            }
                        };
                        if obj.class_name() != "item" {
                            diag(
                                DiagLevel::Warn,
                                &format!(
                                    "object '{}' in layer '{}' is not an item, skipped",
                                    obj.name, layer.name
                                ),
                            );
                            continue;
                        }
                        let clean = gid.clean();
                        if clean < first_gid || clean > max_gid {
                            return Err(MapError::InvalidTileGid {
                                layer: layer.name.clone(),
                                gid: clean,
                                max_gid,
                            });
                        }
                        let local = clean - first_gid;
                        // Tiled anchors tile objects at their bottom-left.
                        items.push(Item::new(local, obj.x, obj.y - tile_h, tile_w, tile_h));
                    }
                }
                other => {
                    diag(
                        DiagLevel::Warn,
                        &format!("layer '{}' has unsupported type '{}', skipped", layer.name, other),
                    );
                }
            }
        }

        Ok(Self {
            width: raw.width,
            height: raw.height,
            tile_width: raw.tilewidth,
            tile_height: raw.tileheight,
            first_gid,
            layers,
            catalog,
            items,
            debug_rendering: false,
            on_collect: None,
            diag,
        })
    }

    /// Map width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Map-level tile width in pixels.
    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Map-level tile height in pixels.
    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// World size in pixels, for camera construction.
    pub fn pixel_size(&self) -> Vec2 {
        vec2(
            (self.width * self.tile_width) as f32,
            (self.height * self.tile_height) as f32,
        )
    }

    /// First gid of the backing tileset as declared by the map.
    pub fn first_gid(&self) -> u32 {
        self.first_gid
    }

    /// The tileset catalog backing this world.
    pub fn catalog(&self) -> &TilesetCatalog {
        &self.catalog
    }

    /// Layers in declared (bottom to top) order.
    pub fn layers(&self) -> &[MapLayer] {
        &self.layers
    }

    /// All items, collected ones included.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Toggle debug outline overlays. No effect on collision.
    pub fn set_debug_rendering(&mut self, enabled: bool) {
        self.debug_rendering = enabled;
    }

    /// Whether debug overlays are enabled.
    pub fn debug_rendering(&self) -> bool {
        self.debug_rendering
    }

    /// Register the one-shot item collection callback. It receives the
    /// collected item's local tile id, exactly once per item.
    pub fn set_collect_callback(&mut self, callback: impl FnMut(u32) + 'static) {
        self.on_collect = Some(Box::new(callback));
    }

    /// Replace the diagnostic sink (defaults to macroquad's logger).
    pub fn set_diag_sink(&mut self, sink: DiagSink) {
        self.diag = sink;
    }

    /// Advance animations, then every non-collected item. Call once per
    /// fixed simulation step, before the camera update and any
    /// collision-driven position commits.
    pub fn update(&mut self, dt: f32) {
        self.catalog.advance(dt);
        for item in self.items.iter_mut().filter(|i| !i.is_collected()) {
            item.update(dt);
        }
    }

    /// Whether an actor box at `(x, y)` sized `(w, h)` overlaps any solid
    /// geometry on a collision-enabled layer.
    ///
    /// Full tile-range overlap: every tile the box covers is tested
    /// against the solid flag (full-tile rect) and any declared collision
    /// box. Tiles outside the map are skipped, i.e. off-map space is open;
    /// hosts that want boundary walls surround the map with solid tiles.
    pub fn check_collision(&self, x: f32, y: f32, w: f32, h: f32) -> bool {
        if w <= 0.0 || h <= 0.0 {
            return false;
        }
        let tile_w = self.tile_width as f32;
        let tile_h = self.tile_height as f32;

        let start_x = (x / tile_w).floor() as i64;
        let end_x = ((x + w - 1.0) / tile_w).floor() as i64;
        let start_y = (y / tile_h).floor() as i64;
        let end_y = ((y + h - 1.0) / tile_h).floor() as i64;

        for ty in start_y..=end_y {
            if ty < 0 || ty >= self.height as i64 {
                continue;
            }
            for tx in start_x..=end_x {
                if tx < 0 || tx >= self.width as i64 {
                    continue;
                }
                let origin_x = tx as f32 * tile_w;
                let origin_y = ty as f32 * tile_h;

                for layer in self.layers.iter().filter(|l| l.collision) {
                    let gid = layer.gid_at(tx as u32, ty as u32, self.width);
                    let local = match gid.local_id() {
                        Some(local) => local,
                        None => continue,
                    };

                    if self.catalog.is_solid(local)
                        && boxes_overlap(x, y, w, h, origin_x, origin_y, tile_w, tile_h)
                    {
                        return true;
                    }
                    if let Some(bx) = self.catalog.collision_box(local) {
                        if boxes_overlap(
                            x,
                            y,
                            w,
                            h,
                            origin_x + bx.x,
                            origin_y + bx.y,
                            bx.width,
                            bx.height,
                        ) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Collect every non-collected item overlapping the query box, firing
    /// the registered callback once per newly collected item.
    pub fn resolve_item_collisions(&mut self, x: f32, y: f32, w: f32, h: f32) {
        for item in &mut self.items {
            if item.overlaps(x, y, w, h) && item.collect() {
                if let Some(callback) = self.on_collect.as_mut() {
                    callback(item.tile_id());
                }
            }
        }
    }

    /// Inclusive tile window covering the view, with a one-tile overscan
    /// margin against popping at the edges, clamped to the map. `None`
    /// when the view lies entirely off-map.
    fn visible_tiles(&self, view: &CameraView) -> Option<(u32, u32, u32, u32)> {
        let tile_w = self.tile_width as f32;
        let tile_h = self.tile_height as f32;
        let visible = view.viewport / view.zoom;

        let x0 = (view.offset.x / tile_w).floor() as i64 - 1;
        let y0 = (view.offset.y / tile_h).floor() as i64 - 1;
        let x1 = ((view.offset.x + visible.x) / tile_w).floor() as i64 + 1;
        let y1 = ((view.offset.y + visible.y) / tile_h).floor() as i64 + 1;

        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width as i64 - 1);
        let y1 = y1.min(self.height as i64 - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Screen-space destination rect for a world rect under the view:
    /// floored position, ceiling-rounded size so adjacent tiles leave no
    /// seams under non-integer zoom.
    fn dst_rect(view: &CameraView, world_x: f32, world_y: f32, w: f32, h: f32) -> Rect {
        Rect::new(
            ((world_x - view.offset.x) * view.zoom).floor(),
            ((world_y - view.offset.y) * view.zoom).floor(),
            (w * view.zoom).ceil(),
            (h * view.zoom).ceil(),
        )
    }

    /// Draw every visible layer bottom to top over the culled tile
    /// window, then the non-collected items. Layer order is the only
    /// z-ordering. Read-only with respect to world state.
    pub fn render<R: Render2d>(&self, renderer: &mut R, view: &CameraView) {
        let (x0, y0, x1, y1) = match self.visible_tiles(view) {
            Some(window) => window,
            None => return,
        };
        let tile_w = self.tile_width as f32;
        let tile_h = self.tile_height as f32;

        for layer in self.layers.iter().filter(|l| l.visible) {
            for ty in y0..=y1 {
                for tx in x0..=x1 {
                    let local = match layer.gid_at(tx, ty, self.width).local_id() {
                        Some(local) => local,
                        None => continue,
                    };
                    let frame = self.catalog.current_tile_id(local);
                    let src = self.catalog.src_rect(frame);
                    let dst = Self::dst_rect(
                        view,
                        tx as f32 * tile_w,
                        ty as f32 * tile_h,
                        tile_w,
                        tile_h,
                    );
                    renderer.draw_texture(self.catalog.texture(), src, dst);
                }
            }
        }

        for item in self.items.iter().filter(|i| !i.is_collected()) {
            let frame = self.catalog.current_tile_id(item.tile_id());
            let src = self.catalog.src_rect(frame);
            let (ix, iy) = item.position();
            let (iw, ih) = item.size();
            let dst = Self::dst_rect(view, ix, iy, iw, ih);
            renderer.draw_texture(self.catalog.texture(), src, dst);
        }

        if self.debug_rendering {
            self.render_debug_overlay(renderer, view);
        }
    }

    /// Outline solid tiles and declared collision boxes over the same
    /// visible window. Diagnostic only.
    pub fn render_debug_overlay<R: Render2d>(&self, renderer: &mut R, view: &CameraView) {
        let (x0, y0, x1, y1) = match self.visible_tiles(view) {
            Some(window) => window,
            None => return,
        };
        let tile_w = self.tile_width as f32;
        let tile_h = self.tile_height as f32;

        for layer in self.layers.iter().filter(|l| l.collision) {
            for ty in y0..=y1 {
                for tx in x0..=x1 {
                    let local = match layer.gid_at(tx, ty, self.width).local_id() {
                        Some(local) => local,
                        None => continue,
                    };
                    let origin_x = tx as f32 * tile_w;
                    let origin_y = ty as f32 * tile_h;
                    if self.catalog.is_solid(local) {
                        let dst = Self::dst_rect(view, origin_x, origin_y, tile_w, tile_h);
                        renderer.draw_outline_rect(dst, RED);
                    }
                    if let Some(bx) = self.catalog.collision_box(local) {
                        let dst = Self::dst_rect(
                            view,
                            origin_x + bx.x,
                            origin_y + bx.y,
                            bx.width,
                            bx.height,
                        );
                        renderer.draw_outline_rect(dst, GREEN);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::json_loader::RawTileset;
    use crate::render::TextureSlot;

    // 4x4 map, 32 px tiles. Tile id 0 is plain, id 1 is solid, id 5
    // carries the {4,0,24,32} collision box.
    const TILESET: &str = r#"{
        "tilewidth": 32, "tileheight": 32,
        "columns": 4, "tilecount": 16,
        "image": "tiles.png",
        "tiles": [
            {"id": 1, "properties": [{"name": "solid", "type": "bool", "value": true}]},
            {"id": 5, "objectgroup": {"objects": [
                {"name": "collision_box", "x": 4.0, "y": 0.0, "width": 24.0, "height": 32.0}
            ]}}
        ]
    }"#;

    fn world(map_json: &str) -> TileWorld {
        let raw_ts: RawTileset = serde_json::from_str(TILESET).expect("tileset fixture");
        let catalog = TilesetCatalog::from_raw(raw_ts, TextureSlot(0)).expect("catalog");
        let raw: RawMap = serde_json::from_str(map_json).expect("map fixture");
        TileWorld::from_raw(raw, catalog).expect("world")
    }

    // Layer 0 decorative, layer 1 with solid gid 2 (local id 1) at (1,1).
    fn two_layer_world() -> TileWorld {
        world(
            r#"{
            "width": 4, "height": 4,
            "tilewidth": 32, "tileheight": 32,
            "tilesets": [{"firstgid": 1, "source": "tileset.json"}],
            "layers": [
                {"type": "tilelayer", "name": "ground",
                 "data": [1,1,1,1, 1,1,1,1, 1,1,1,1, 1,1,1,1],
                 "properties": [{"name": "collision", "type": "bool", "value": false}]},
                {"type": "tilelayer", "name": "walls",
                 "data": [0,0,0,0, 0,2,0,0, 0,0,0,0, 0,0,0,0]}
            ]
        }"#,
        )
    }

    #[test]
    fn solid_tile_collides_inside_its_range() {
        let w = two_layer_world();
        assert!(w.check_collision(32.0, 32.0, 16.0, 16.0));
        assert!(!w.check_collision(0.0, 0.0, 16.0, 16.0));
    }

    #[test]
    fn one_pixel_box_on_solid_tile_collides_but_edge_neighbour_does_not() {
        let w = two_layer_world();
        assert!(w.check_collision(32.0, 32.0, 1.0, 1.0));
        // Box filling the tile left of the wall, sharing its edge.
        assert!(!w.check_collision(0.0, 32.0, 32.0, 32.0));
        assert!(!w.check_collision(64.0, 32.0, 32.0, 32.0));
    }

    #[test]
    fn collision_disabled_layer_is_exempt_even_with_solid_tiles() {
        // "ground" is all gid 1 (local id 0, not solid). Flip it to the
        // solid gid and keep collision=false: still no collisions.
        let w = world(
            r#"{
            "width": 2, "height": 2,
            "tilewidth": 32, "tileheight": 32,
            "tilesets": [{"firstgid": 1, "source": "tileset.json"}],
            "layers": [
                {"type": "tilelayer", "name": "deco",
                 "data": [2,2,2,2],
                 "properties": [{"name": "collision", "type": "bool", "value": false}]}
            ]
        }"#,
        );
        assert!(!w.check_collision(0.0, 0.0, 64.0, 64.0));
    }

    #[test]
    fn flip_bits_do_not_change_collision_lookups() {
        let flipped = 2u32 | crate::gid::FLIP_H | crate::gid::FLIP_V;
        let w = world(&format!(
            r#"{{
            "width": 2, "height": 2,
            "tilewidth": 32, "tileheight": 32,
            "tilesets": [{{"firstgid": 1, "source": "tileset.json"}}],
            "layers": [
                {{"type": "tilelayer", "name": "walls", "data": [{flipped},0,0,0]}}
            ]
        }}"#
        ));
        assert!(w.check_collision(8.0, 8.0, 8.0, 8.0));
    }

    #[test]
    fn collision_box_misses_query_outside_the_box() {
        // Tile id 5 (gid 6) at (0,0) with box {4,0,24,32}: the top-left
        // 4x4 corner of the tile lies outside the box.
        let w = world(
            r#"{
            "width": 2, "height": 2,
            "tilewidth": 32, "tileheight": 32,
            "tilesets": [{"firstgid": 1, "source": "tileset.json"}],
            "layers": [
                {"type": "tilelayer", "name": "bushes", "data": [6,0,0,0]}
            ]
        }"#,
        );
        assert!(!w.check_collision(0.0, 0.0, 4.0, 4.0));
        assert!(w.check_collision(4.0, 0.0, 4.0, 4.0));
        assert!(w.check_collision(16.0, 16.0, 8.0, 8.0));
    }

    #[test]
    fn off_map_space_is_open() {
        let w = two_layer_world();
        assert!(!w.check_collision(-64.0, -64.0, 32.0, 32.0));
        assert!(!w.check_collision(4.0 * 32.0, 0.0, 64.0, 64.0));
        // A box straddling the map edge still hits in-map solids only.
        assert!(!w.check_collision(-16.0, 0.0, 32.0, 32.0));
    }

    #[test]
    fn degenerate_query_boxes_never_collide() {
        let w = two_layer_world();
        assert!(!w.check_collision(33.0, 33.0, 0.0, 0.0));
        assert!(!w.check_collision(33.0, 33.0, -4.0, 4.0));
    }

    #[test]
    fn items_load_from_object_layer_with_bottom_anchor() {
        let w = world(
            r#"{
            "width": 4, "height": 4,
            "tilewidth": 32, "tileheight": 32,
            "tilesets": [{"firstgid": 1, "source": "tileset.json"}],
            "layers": [
                {"type": "tilelayer", "name": "ground",
                 "data": [1,1,1,1, 1,1,1,1, 1,1,1,1, 1,1,1,1]},
                {"type": "objectgroup", "name": "pickups", "objects": [
                    {"gid": 4, "x": 64.0, "y": 96.0, "type": "item"},
                    {"name": "spawn", "x": 0.0, "y": 0.0, "type": "spawn"}
                ]}
            ]
        }"#,
        );
        assert_eq!(w.items().len(), 1);
        let item = &w.items()[0];
        assert_eq!(item.tile_id(), 3);
        assert_eq!(item.position(), (64.0, 64.0));
        assert_eq!(item.size(), (32.0, 32.0));
    }

    #[test]
    fn item_collection_fires_callback_exactly_once() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut w = world(
            r#"{
            "width": 4, "height": 4,
            "tilewidth": 32, "tileheight": 32,
            "tilesets": [{"firstgid": 1, "source": "tileset.json"}],
            "layers": [
                {"type": "tilelayer", "name": "ground",
                 "data": [1,1,1,1, 1,1,1,1, 1,1,1,1, 1,1,1,1]},
                {"type": "objectgroup", "name": "pickups", "objects": [
                    {"gid": 4, "x": 32.0, "y": 64.0, "type": "item"}
                ]}
            ]
        }"#,
        );

        let collected: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&collected);
        w.set_collect_callback(move |tile_id| sink.borrow_mut().push(tile_id));

        for _ in 0..3 {
            w.resolve_item_collisions(40.0, 40.0, 16.0, 16.0);
        }
        assert_eq!(collected.borrow().as_slice(), &[3]);
        assert!(w.items()[0].is_collected());
    }

    #[test]
    fn item_collection_misses_non_overlapping_boxes() {
        let mut w = world(
            r#"{
            "width": 4, "height": 4,
            "tilewidth": 32, "tileheight": 32,
            "tilesets": [{"firstgid": 1, "source": "tileset.json"}],
            "layers": [
                {"type": "tilelayer", "name": "ground",
                 "data": [1,1,1,1, 1,1,1,1, 1,1,1,1, 1,1,1,1]},
                {"type": "objectgroup", "name": "pickups", "objects": [
                    {"gid": 4, "x": 32.0, "y": 64.0, "type": "item"}
                ]}
            ]
        }"#,
        );
        w.resolve_item_collisions(100.0, 100.0, 16.0, 16.0);
        assert!(!w.items()[0].is_collected());
    }

    #[test]
    fn layer_size_mismatch_aborts_load() {
        let raw_ts: RawTileset = serde_json::from_str(TILESET).expect("tileset fixture");
        let catalog = TilesetCatalog::from_raw(raw_ts, TextureSlot(0)).expect("catalog");
        let raw: RawMap = serde_json::from_str(
            r#"{
            "width": 2, "height": 2,
            "tilewidth": 32, "tileheight": 32,
            "layers": [{"type": "tilelayer", "name": "oops", "data": [1, 2, 3]}]
        }"#,
        )
        .expect("map fixture");
        let err = TileWorld::from_raw(raw, catalog).err().expect("load fails");
        assert!(matches!(err, MapError::InvalidLayerSize { layer } if layer == "oops"));
    }

    #[test]
    fn out_of_range_gid_aborts_load() {
        let raw_ts: RawTileset = serde_json::from_str(TILESET).expect("tileset fixture");
        let catalog = TilesetCatalog::from_raw(raw_ts, TextureSlot(0)).expect("catalog");
        let raw: RawMap = serde_json::from_str(
            r#"{
            "width": 1, "height": 1,
            "tilewidth": 32, "tileheight": 32,
            "tilesets": [{"firstgid": 1, "source": "tileset.json"}],
            "layers": [{"type": "tilelayer", "name": "ground", "data": [99]}]
        }"#,
        )
        .expect("map fixture");
        let err = TileWorld::from_raw(raw, catalog).err().expect("load fails");
        assert!(matches!(err, MapError::InvalidTileGid { gid: 99, .. }));
    }

    #[test]
    fn visible_window_clamps_to_map_and_keeps_overscan() {
        let w = two_layer_world(); // 4x4 tiles of 32 px
        let view = CameraView {
            offset: vec2(0.0, 0.0),
            zoom: 1.0,
            viewport: vec2(64.0, 64.0),
        };
        // Window covers tiles 0..=2 in both axes lower-clamped at 0.
        assert_eq!(w.visible_tiles(&view), Some((0, 0, 3, 3)));

        let view = CameraView {
            offset: vec2(96.0, 96.0),
            zoom: 2.0,
            viewport: vec2(64.0, 64.0),
        };
        assert_eq!(w.visible_tiles(&view), Some((2, 2, 3, 3)));
    }

    #[test]
    fn fully_off_map_view_yields_no_window() {
        let w = two_layer_world();
        let view = CameraView {
            offset: vec2(1000.0, 1000.0),
            zoom: 1.0,
            viewport: vec2(64.0, 64.0),
        };
        assert_eq!(w.visible_tiles(&view), None);
    }
}
