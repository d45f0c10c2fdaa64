/// Single-page dispatch dashboard served at the console root.
pub const CONSOLE_PAGE_HTML: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>🔥 Fire Station Command Center</title>
  <style>
    body {
      margin: 0;
      padding: 1.5rem;
      background: #0f172a;
      color: #e2e8f0;
      font-family: system-ui, sans-serif;
    }
    h1 { margin: 0 0 0.25rem; }
    .subtitle { color: #94a3b8; margin-bottom: 1.5rem; }
    .columns { display: flex; gap: 1.5rem; flex-wrap: wrap; }
    .panel {
      background: #1e293b;
      border: 1px solid #334155;
      border-radius: 10px;
      padding: 1rem;
      flex: 1;
      min-width: 320px;
    }
    .panel h2 { margin-top: 0; font-size: 1rem; color: #f8fafc; }
    label { display: block; margin: 0.5rem 0 0.15rem; font-size: 0.85rem; }
    input[type="text"], input[type="number"] {
      width: 95%;
      padding: 0.4rem;
      border-radius: 6px;
      border: 1px solid #475569;
      background: #0f172a;
      color: #e2e8f0;
    }
    .radio-row, .checkbox-row { margin: 0.25rem 0; font-size: 0.9rem; }
    button {
      margin-top: 1rem;
      width: 100%;
      padding: 0.75rem;
      border: none;
      border-radius: 8px;
      background: #dc2626;
      color: white;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
    }
    button:hover { background: #b91c1c; }
    pre#report {
      white-space: pre-wrap;
      font-size: 0.8rem;
      background: #0f172a;
      border-radius: 6px;
      padding: 0.75rem;
      min-height: 14rem;
    }
    table { width: 100%; border-collapse: collapse; font-size: 0.75rem; }
    th, td { border: 1px solid #334155; padding: 0.3rem; text-align: left; }
    th { background: #0f172a; }
    img.chart { width: 100%; background: white; border-radius: 6px; }
    iframe#map { width: 100%; height: 300px; border: 0; border-radius: 6px; background: white; }
    #status { margin: 1rem 0; color: #facc15; min-height: 1.25rem; }
  </style>
</head>
<body>
  <h1>🚨 FIRE STATION COMMAND CENTER</h1>
  <div class="subtitle">AI-Powered Emergency Dispatch &amp; Visualization</div>

  <div class="columns">
    <div class="panel">
      <h2>📍 Incident Details</h2>
      <label for="incident-type">Incident Type</label>
      <input type="text" id="incident-type" placeholder="Building Fire / Road Accident" />
      <label>Severity Level</label>
      <div class="radio-row"><label><input type="radio" name="severity" value="Low" /> Low</label></div>
      <div class="radio-row"><label><input type="radio" name="severity" value="Medium" checked /> Medium</label></div>
      <div class="radio-row"><label><input type="radio" name="severity" value="High" /> High</label></div>
      <label for="latitude">Latitude</label>
      <input type="text" id="latitude" placeholder="12.9756" />
      <label for="longitude">Longitude</label>
      <input type="text" id="longitude" placeholder="77.5950" />
      <label for="water">Water Used (Liters)</label>
      <input type="number" id="water" value="500" />
    </div>
    <div class="panel">
      <h2>🧰 Equipment Allocation</h2>
      <div class="checkbox-row"><label><input type="checkbox" class="equipment" value="🧯 Fire Extinguisher" /> 🧯 Fire Extinguisher</label></div>
      <div class="checkbox-row"><label><input type="checkbox" class="equipment" value="💧 Water Hose" /> 💧 Water Hose</label></div>
      <div class="checkbox-row"><label><input type="checkbox" class="equipment" value="🫁 Oxygen Cylinder" /> 🫁 Oxygen Cylinder</label></div>
      <div class="checkbox-row"><label><input type="checkbox" class="equipment" value="✂ Hydraulic Cutter" /> ✂ Hydraulic Cutter</label></div>
      <div class="checkbox-row"><label><input type="checkbox" class="equipment" value="🧤 Protective Gear" /> 🧤 Protective Gear</label></div>
      <button id="dispatch-btn">🚨 DISPATCH RESPONSE UNIT</button>
    </div>
  </div>

  <div id="status"></div>

  <div class="columns">
    <div class="panel">
      <h2>📄 Dispatch Report</h2>
      <pre id="report"></pre>
    </div>
    <div class="panel">
      <h2>📊 Incident &amp; Dispatch History</h2>
      <table id="history">
        <thead>
          <tr>
            <th>Incident</th><th>Location</th><th>Severity</th><th>Vehicle</th>
            <th>Officers</th><th>Route</th><th>ETA (min)</th>
            <th>Equipment Used</th><th>Water Used (L)</th>
          </tr>
        </thead>
        <tbody></tbody>
      </table>
    </div>
  </div>

  <div class="columns">
    <div class="panel">
      <h2>📈 Equipment Usage Chart</h2>
      <img id="equipment-chart" class="chart" alt="" />
    </div>
    <div class="panel">
      <h2>💧 Water Usage Trends</h2>
      <img id="water-chart" class="chart" alt="" />
    </div>
    <div class="panel">
      <h2>🗺️ Vehicle Movement Map</h2>
      <iframe id="map"></iframe>
    </div>
  </div>

  <script>
    const statusLine = document.getElementById('status');

    function selectedEquipment() {
      return Array.from(document.querySelectorAll('.equipment:checked')).map(c => c.value);
    }

    function renderHistory(rows) {
      const body = document.querySelector('#history tbody');
      body.innerHTML = '';
      for (const row of rows) {
        const tr = document.createElement('tr');
        const cells = [
          row.incident_type,
          row.location.latitude + ', ' + row.location.longitude,
          row.severity,
          row.vehicle,
          row.officers.join(', '),
          row.route,
          row.eta_minutes,
          row.equipment.join(', '),
          row.water_liters,
        ];
        for (const value of cells) {
          const td = document.createElement('td');
          td.textContent = value;
          tr.appendChild(td);
        }
        body.appendChild(tr);
      }
    }

    async function refreshPayload() {
      const response = await fetch('/payload');
      const payload = await response.json();
      document.getElementById('report').textContent = payload.report;
      renderHistory(payload.history);
      const bust = '?t=' + Date.now();
      if (payload.equipment_chart) {
        document.getElementById('equipment-chart').src = payload.equipment_chart + bust;
      }
      if (payload.water_chart) {
        document.getElementById('water-chart').src = payload.water_chart + bust;
      }
      if (payload.map_document) {
        document.getElementById('map').src = payload.map_document + bust;
      }
    }

    document.getElementById('dispatch-btn').addEventListener('click', async () => {
      statusLine.textContent = 'Dispatching...';
      const request = {
        incident_type: document.getElementById('incident-type').value,
        severity: document.querySelector('input[name="severity"]:checked').value,
        latitude: document.getElementById('latitude').value,
        longitude: document.getElementById('longitude').value,
        water_liters: Number(document.getElementById('water').value),
        equipment: selectedEquipment(),
      };
      const response = await fetch('/dispatch', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(request),
      });
      if (!response.ok) {
        statusLine.textContent = 'Dispatch failed: check the coordinates and try again.';
        return;
      }
      const reply = await response.json();
      statusLine.textContent =
        'Dispatched ' + reply.vehicle + ' via ' + reply.route + ' (ETA ' + reply.eta_minutes + ' min)';
      await refreshPayload();
    });

    refreshPayload();
  </script>
</body>
</html>
"##;
